//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Optional values are flattened into `has_*` flags so templates stay simple.

use askama::Template;

use crate::models::{Browser, FeatureSummary};
use crate::render::{EmbedSnippet, EmbedView, PICKER_PERIODS};
use crate::utils::html_escape;

/// Column heading for one browser.
pub struct BrowserHeading {
    pub key: &'static str,
    pub name: &'static str,
}

impl BrowserHeading {
    pub fn all() -> Vec<Self> {
        Browser::ALL
            .iter()
            .map(|b| Self {
                key: b.caniuse_key(),
                name: b.display_name(),
            })
            .collect()
    }
}

/// One support table cell.
pub struct TableCell {
    pub class: String,
    pub has_version: bool,
    pub version: String,
    pub usage: String,
}

/// One support table row.
pub struct TableRow {
    pub period: String,
    pub cells: Vec<TableCell>,
}

/// The iframe content.
#[derive(Template)]
#[template(path = "embed.html")]
pub struct EmbedTemplate {
    pub feature_id: String,
    pub body_class: String,
    pub message_prefix: String,
    pub default_message: String,
    pub has_feature: bool,
    pub title: String,
    pub has_url: bool,
    /// Pre-escaped attribute value.
    pub url: String,
    pub hide_external_link: bool,
    pub has_description: bool,
    pub description: String,
    pub has_note: bool,
    pub note: String,
    pub browsers: Vec<BrowserHeading>,
    pub rows: Vec<TableRow>,
    pub legend_prefixed: bool,
    pub legend_unknown: bool,
    pub legend_flagged: bool,
    pub footer_left: String,
    pub has_footer_right: bool,
    pub footer_right: String,
    pub interactive: bool,
}

impl EmbedTemplate {
    pub fn from_view(view: &EmbedView) -> Self {
        let mut template = Self {
            feature_id: view.feature_id.clone(),
            body_class: view.body_class.clone(),
            message_prefix: view.message_prefix.clone(),
            default_message: view.default_message.clone(),
            has_feature: false,
            title: String::new(),
            has_url: false,
            url: String::new(),
            hide_external_link: false,
            has_description: false,
            description: String::new(),
            has_note: false,
            note: String::new(),
            browsers: BrowserHeading::all(),
            rows: Vec::new(),
            legend_prefixed: false,
            legend_unknown: false,
            legend_flagged: false,
            footer_left: String::new(),
            has_footer_right: false,
            footer_right: String::new(),
            interactive: false,
        };

        let Some(feature) = &view.feature else {
            return template;
        };

        template.has_feature = true;
        template.title = feature.title.clone();
        template.has_url = feature.url.is_some();
        template.url = feature.url.as_deref().map(html_escape).unwrap_or_default();
        template.hide_external_link = feature.hide_external_link;
        template.has_description = feature.description.is_some();
        template.description = feature.description.clone().unwrap_or_default();
        template.has_note = feature.note.is_some();
        template.note = feature.note.clone().unwrap_or_default();
        template.rows = feature
            .rows
            .iter()
            .map(|row| TableRow {
                period: row.period.clone(),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| TableCell {
                        class: cell.class.clone(),
                        has_version: cell.version.is_some(),
                        version: cell.version.clone().unwrap_or_default(),
                        usage: cell.usage.clone(),
                    })
                    .collect(),
            })
            .collect();
        template.legend_prefixed = feature.legend_prefixed;
        template.legend_unknown = feature.legend_unknown;
        template.legend_flagged = feature.legend_flagged;
        template.footer_left = feature.footer_left.clone();
        template.has_footer_right = feature.footer_right.is_some();
        template.footer_right = feature.footer_right.clone().unwrap_or_default();
        template.interactive = feature.interactive;
        template
    }
}

/// Feature choice in the picker dropdown.
pub struct FeatureOption {
    pub id: String,
    pub title: String,
    pub selected: bool,
}

/// Period checkbox in the picker.
pub struct PeriodOption {
    pub name: &'static str,
    pub label: String,
    pub checked: bool,
    pub locked: bool,
}

/// Feature selected when the picker opens without a choice.
pub const DEFAULT_PICKER_FEATURE: &str = "once-event-listener";

/// Periods pre-checked when the picker opens without a choice.
const DEFAULT_PICKER_CHECKED: [&str; 4] = ["future_1", "current", "past_1", "past_2"];

/// Feature picker and snippet generator.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub site_url: String,
    pub features: Vec<FeatureOption>,
    pub periods: Vec<PeriodOption>,
    pub accessible_colours: bool,
    pub has_snippet: bool,
    pub loader_tag: String,
    pub snippet_html: String,
    pub snippet_escaped: String,
    pub embed_url: String,
    pub has_list_error: bool,
}

impl IndexTemplate {
    pub fn new(
        site_url: &str,
        features: &[FeatureSummary],
        snippet: Option<&EmbedSnippet>,
        has_list_error: bool,
    ) -> Self {
        let selected_id = snippet
            .map(|s| s.feature_id.as_str())
            .unwrap_or(DEFAULT_PICKER_FEATURE);

        let features = features
            .iter()
            .map(|f| FeatureOption {
                id: f.id.clone(),
                title: f.title.clone(),
                selected: f.id == selected_id,
            })
            .collect();

        let periods = PICKER_PERIODS
            .iter()
            .map(|name| PeriodOption {
                name,
                label: period_label(name),
                checked: match snippet {
                    Some(s) => s.periods.iter().any(|p| p == name),
                    None => DEFAULT_PICKER_CHECKED.contains(name),
                },
                locked: *name == "current",
            })
            .collect();

        let site = site_url.trim_end_matches('/');
        Self {
            title: "Can I Use Embed".to_string(),
            site_url: site.to_string(),
            features,
            periods,
            accessible_colours: snippet.map(|s| s.accessible_colours).unwrap_or(false),
            has_snippet: snippet.is_some(),
            loader_tag: crate::render::loader_tag(site),
            snippet_html: snippet.map(EmbedSnippet::html).unwrap_or_default(),
            snippet_escaped: snippet.map(EmbedSnippet::escaped).unwrap_or_default(),
            embed_url: snippet.map(|s| s.embed_url(site)).unwrap_or_default(),
            has_list_error,
        }
    }
}

/// Human label for a picker period (`past_2` → `Past 2`).
fn period_label(name: &str) -> String {
    match name.split_once('_') {
        Some((kind, n)) => {
            let mut chars = kind.chars();
            let head = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
            format!("{}{} {}", head, chars.as_str(), n)
        }
        None => "Current".to_string(),
    }
}
