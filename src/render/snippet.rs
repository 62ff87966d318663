//! Embed snippets for host pages, as produced by the feature picker.

use crate::utils::{escape_angle_brackets, html_escape};

/// Periods offered by the picker, in display order.
pub const PICKER_PERIODS: [&str; 9] = [
    "future_3", "future_2", "future_1", "current", "past_1", "past_2", "past_3", "past_4",
    "past_5",
];

/// Configuration composed into an embed snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSnippet {
    pub feature_id: String,
    pub periods: Vec<String>,
    pub accessible_colours: bool,
}

impl EmbedSnippet {
    /// Build a snippet. `current` is always shown; picker periods are kept in
    /// picker order and other names are dropped.
    pub fn new<S: AsRef<str>>(feature_id: &str, periods: &[S], accessible_colours: bool) -> Self {
        let periods = PICKER_PERIODS
            .iter()
            .filter(|p| **p == "current" || periods.iter().any(|s| s.as_ref() == **p))
            .map(|p| p.to_string())
            .collect();

        Self {
            feature_id: feature_id.to_string(),
            periods,
            accessible_colours,
        }
    }

    /// Parse the picker form's query string (`periods` may repeat or be
    /// comma-separated). Returns `None` until a feature is chosen.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut feature_id = None;
        let mut periods = Vec::new();
        let mut accessible_colours = false;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "feat" if !value.is_empty() => feature_id = Some(value.into_owned()),
                "periods" => periods.extend(value.split(',').map(str::to_string)),
                "accessible-colours" => accessible_colours = value == "true",
                _ => {}
            }
        }

        feature_id.map(|id| Self::new(&id, &periods, accessible_colours))
    }

    pub fn periods_param(&self) -> String {
        self.periods.join(",")
    }

    /// Markup pasted into the host page; the loader script turns it into an
    /// iframe.
    pub fn html(&self) -> String {
        let id = html_escape(&self.feature_id);
        format!(
            "<p class=\"ciu_embed\" data-feature=\"{id}\" data-periods=\"{}\" data-accessible-colours=\"{}\">\n\
             \tData on support for the {id} feature across the major browsers\n\
             </p>",
            html_escape(&self.periods_param()),
            self.accessible_colours
        )
    }

    /// The snippet as displayable code.
    pub fn escaped(&self) -> String {
        escape_angle_brackets(&self.html())
    }

    /// Direct URL of the embed page, for hosts that add the iframe themselves.
    pub fn embed_url(&self, site_url: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("feat", &self.feature_id)
            .append_pair("periods", &self.periods_param())
            .append_pair(
                "accessible-colours",
                if self.accessible_colours { "true" } else { "false" },
            )
            .finish();
        format!("{}/embed?{}", site_url.trim_end_matches('/'), query)
    }
}

/// Script tag a host page includes once to activate its snippets.
pub fn loader_tag(site_url: &str) -> String {
    format!(
        "<script src=\"{}/caniuse-embed.min.js\"></script>",
        html_escape(site_url.trim_end_matches('/'))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_always_included() {
        let snippet = EmbedSnippet::new("flexbox", &["past_2", "future_1"], false);
        assert_eq!(snippet.periods, vec!["future_1", "current", "past_2"]);

        let snippet = EmbedSnippet::new::<&str>("flexbox", &[], false);
        assert_eq!(snippet.periods, vec!["current"]);
    }

    #[test]
    fn test_from_query() {
        let snippet = EmbedSnippet::from_query(
            "feat=css-grid&periods=past_1&periods=current&periods=bogus&accessible-colours=true",
        )
        .unwrap();
        assert_eq!(snippet.feature_id, "css-grid");
        assert_eq!(snippet.periods, vec!["current", "past_1"]);
        assert!(snippet.accessible_colours);

        assert_eq!(EmbedSnippet::from_query("periods=current"), None);
        assert_eq!(EmbedSnippet::from_query("feat="), None);
    }

    #[test]
    fn test_html_and_escaped() {
        let snippet = EmbedSnippet::new("flexbox", &["future_1", "current", "past_1"], true);
        assert_eq!(
            snippet.html(),
            "<p class=\"ciu_embed\" data-feature=\"flexbox\" data-periods=\"future_1,current,past_1\" data-accessible-colours=\"true\">\n\
             \tData on support for the flexbox feature across the major browsers\n\
             </p>"
        );
        assert!(snippet.escaped().starts_with("&lt;p class=\"ciu_embed\""));
        assert!(snippet.escaped().ends_with("&lt;/p&gt;"));
    }

    #[test]
    fn test_embed_url() {
        let snippet = EmbedSnippet::new("mdn-css__properties__gap", &["past_1"], false);
        assert_eq!(
            snippet.embed_url("https://embed.example.com/"),
            "https://embed.example.com/embed?feat=mdn-css__properties__gap&periods=current%2Cpast_1&accessible-colours=false"
        );
        assert_eq!(
            loader_tag("https://embed.example.com"),
            "<script src=\"https://embed.example.com/caniuse-embed.min.js\"></script>"
        );
    }
}
