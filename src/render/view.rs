//! Turns a loaded embed into the values the embed template displays.

use chrono::NaiveDate;

use crate::models::{Browser, DataSource, EmbedOptions, Feature, SupportCode};
use crate::services::{EmbedState, ResolvedEmbed};
use crate::utils::{escape_angle_brackets, format_percent, format_stamp_date, html_escape};

/// Prefix of the message posted to the parent window so the host can size
/// the iframe. `embed.js` appends the pixel height, giving the
/// `ciu_embed:<feature>:<height>` format host pages parse.
pub fn height_message_prefix(feature_id: &str) -> String {
    format!("ciu_embed:{}:", feature_id)
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Browser id followed by any support codes.
    pub class: String,
    /// Shortened version; `None` renders an empty placeholder.
    pub version: Option<String>,
    pub usage: String,
}

/// One table row (one period).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub period: String,
    pub cells: Vec<CellView>,
}

/// The feature block of a successfully loaded embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureView {
    pub title: String,
    pub url: Option<String>,
    /// Sanitized description markup.
    pub description: Option<String>,
    /// Global usage or status line markup.
    pub note: Option<String>,
    pub footer_left: String,
    /// Date stamp in screenshot mode.
    pub footer_right: Option<String>,
    /// Whether the accessible-colours toggle is wired up.
    pub interactive: bool,
    pub hide_external_link: bool,
    pub rows: Vec<RowView>,
    pub legend_prefixed: bool,
    pub legend_unknown: bool,
    pub legend_flagged: bool,
}

/// Everything the embed page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub feature_id: String,
    pub body_class: String,
    /// Loading, empty or error message markup.
    pub default_message: String,
    pub feature: Option<FeatureView>,
    pub message_prefix: String,
}

/// Build the embed view for a loaded (or failed, or empty) embed.
pub fn build_embed_view(
    options: &EmbedOptions,
    state: &EmbedState,
    site_url: &str,
    today: NaiveDate,
) -> EmbedView {
    let feature_id = options.feature_id.clone().unwrap_or_default();

    let (default_message, feature) = match state {
        EmbedState::Empty => ("No feature ID was specified".to_string(), None),
        EmbedState::Failed => ("Feature not found...".to_string(), None),
        EmbedState::Resolved(resolved) => (
            loading_message(options),
            Some(feature_view(options, resolved, site_url, today)),
        ),
    };

    let body_class = if feature.is_some() {
        body_classes(options)
    } else {
        String::new()
    };

    EmbedView {
        message_prefix: height_message_prefix(&feature_id),
        feature_id,
        body_class,
        default_message,
        feature,
    }
}

/// Message shown before data arrives.
fn loading_message(options: &EmbedOptions) -> String {
    let Some(feature_id) = options.feature_id.as_deref() else {
        return "No feature ID was specified".to_string();
    };
    let id = html_escape(feature_id);

    match options.image_base.as_deref() {
        Some(base) => {
            let base = html_escape(base);
            format!(
                "<picture>\
                 <source type=\"image/webp\" srcset=\"{base}.webp\">\
                 <source type=\"image/png\" srcset=\"{base}.png\">\
                 <source type=\"image/jpeg\" srcset=\"{base}.jpg\">\
                 <img src=\"{base}.png\" alt=\"Data on support for the {id} feature across the major browsers\">\
                 </picture>"
            )
        }
        None => format!(
            "Can I Use {id}? Data on support for the {id} feature across the major browsers. (Embed Loading)"
        ),
    }
}

fn body_classes(options: &EmbedOptions) -> String {
    let mut classes = Vec::new();
    if options.accessible_colours {
        classes.push("accessible-colours");
    }
    if options.screenshot {
        classes.push("screenshot");
    }
    classes.push(options.data_source.tag());
    classes.join(" ")
}

fn feature_view(
    options: &EmbedOptions,
    resolved: &ResolvedEmbed,
    site_url: &str,
    today: NaiveDate,
) -> FeatureView {
    let feature = &resolved.feature;

    let rows = options
        .periods
        .iter()
        .rev()
        .map(|period| RowView {
            period: period.name().to_string(),
            cells: Browser::ALL
                .iter()
                .map(|browser| cell_view(resolved, *browser, period.name()))
                .collect(),
        })
        .collect();

    FeatureView {
        title: feature.title.clone(),
        url: feature.url.clone(),
        description: feature
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(sanitize_description),
        note: note(feature),
        footer_left: attribution(options.data_source, site_url),
        footer_right: options.screenshot.then(|| format_stamp_date(today)),
        interactive: !options.screenshot,
        hide_external_link: options.screenshot,
        rows,
        legend_prefixed: resolved.support.any(SupportCode::Prefixed),
        legend_unknown: resolved.support.any(SupportCode::Unknown),
        legend_flagged: resolved.support.any(SupportCode::Flagged),
    }
}

fn cell_view(resolved: &ResolvedEmbed, browser: Browser, period: &str) -> CellView {
    let mut class = browser.caniuse_key().to_string();
    if let Some(status) = resolved.support.get(browser, period) {
        let codes = status.css_classes();
        if !codes.is_empty() {
            class.push(' ');
            class.push_str(&codes);
        }
    }

    CellView {
        class,
        version: resolved
            .tables
            .version(browser, period)
            .map(|v| shorten_version(v).to_string()),
        usage: resolved
            .tables
            .usage(browser, period)
            .unwrap_or("0")
            .to_string(),
    }
}

/// The text after the hyphen of a range version (`"15.2-15.3"` → `"15.3"`).
pub fn shorten_version(version: &str) -> &str {
    match version.split('-').nth(1) {
        Some(short) => short,
        None => version,
    }
}

/// Escape a description for embedding, dropping `<code>` markers.
pub fn sanitize_description(description: &str) -> String {
    escape_angle_brackets(description)
        .replace("&lt;code&gt;", "")
        .replace("&lt;/code&gt;", "")
}

fn note(feature: &Feature) -> Option<String> {
    if let Some(y) = feature.usage_perc_y.filter(|y| *y != 0.0) {
        let a = feature.usage_perc_a.unwrap_or(0.0);
        return Some(format!(
            "Global: <span class=\"y\">{}%</span> + <span class=\"a\">{}%</span> = {:.2}%",
            format_percent(y),
            format_percent(a),
            y + a
        ));
    }

    let flags = feature.status.as_ref()?.flags()?;
    if flags.experimental {
        Some("<strong>Experimental</strong> feature".to_string())
    } else if flags.deprecated {
        Some("<strong>Deprecated</strong> feature".to_string())
    } else {
        None
    }
}

fn attribution(source: DataSource, site_url: &str) -> String {
    let site = html_escape(site_url);
    let site_name = url::Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| site_url.to_string());
    let site_name = html_escape(&site_name);

    let data = match source {
        DataSource::Caniuse => "<a href=\"https://caniuse.com\">caniuse.com</a>",
        DataSource::Mdn => "<a href=\"https://github.com/mdn/browser-compat-data\">MDN</a>",
    };
    format!("Data from {data} | Embed from <a href=\"{site}\">{site_name}</a>")
}
