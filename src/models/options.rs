//! Embed options read from the embed page's query string.

use std::fmt;

use super::DataSource;

/// Periods shown when the query string does not name any.
pub const DEFAULT_PERIODS: [&str; 4] = ["future_1", "current", "past_1", "past_2"];

/// Relative position of a period in a browser's release history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOffset {
    Current,
    Past(usize),
    Future(usize),
}

/// A requested display period such as `past_2`, `current` or `future_1`.
///
/// The raw name is kept because it doubles as the table row's CSS class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    name: String,
    offset: Option<PeriodOffset>,
}

impl Period {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let offset = parse_offset(&name);
        Self { name, offset }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed offset, or `None` for names that are not a known period.
    pub fn offset(&self) -> Option<PeriodOffset> {
        self.offset
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn parse_offset(name: &str) -> Option<PeriodOffset> {
    if name == "current" {
        return Some(PeriodOffset::Current);
    }

    let count = || {
        let digits: String = name
            .split('_')
            .nth(1)?
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse::<usize>().ok()
    };

    if name.contains("past") {
        count().map(PeriodOffset::Past)
    } else if name.contains("future") {
        count().map(PeriodOffset::Future)
    } else {
        None
    }
}

/// Immutable configuration for one embed render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Feature to show. `None` is the empty state, not an error.
    pub feature_id: Option<String>,
    pub data_source: DataSource,
    pub periods: Vec<Period>,
    pub accessible_colours: bool,
    /// Base path (without extension) of a fallback image shown while loading.
    pub image_base: Option<String>,
    pub screenshot: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            feature_id: None,
            data_source: DataSource::Caniuse,
            periods: default_periods(),
            accessible_colours: false,
            image_base: None,
            screenshot: false,
        }
    }
}

fn default_periods() -> Vec<Period> {
    DEFAULT_PERIODS.iter().map(|p| Period::new(*p)).collect()
}

impl EmbedOptions {
    /// Build options for a feature with default display settings.
    pub fn for_feature(feature_id: &str) -> Self {
        Self::from_pairs([("feat", feature_id)])
    }

    /// Parse options from a raw (undecoded) query string.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Parse options from decoded key/value pairs. The first occurrence of a
    /// key wins.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
        };

        let feature_id = get("feat").filter(|f| !f.is_empty()).map(str::to_string);
        let data_source = feature_id
            .as_deref()
            .map(DataSource::from_feature_id)
            .unwrap_or(DataSource::Caniuse);

        let periods = match get("periods").filter(|p| !p.is_empty()) {
            Some(list) => list.split(',').map(Period::new).collect(),
            None => default_periods(),
        };

        let image_base = get("image-base")
            .filter(|b| !b.is_empty() && *b != "none")
            .map(str::to_string);

        Self {
            feature_id,
            data_source,
            periods,
            accessible_colours: get("accessible-colours") == Some("true"),
            image_base,
            screenshot: get("screenshot") == Some("true"),
        }
    }
}
