//! Feature records from either data source, unified for rendering.

use std::collections::HashMap;

use serde::Deserialize;

use super::CaniuseFeature;

/// Status flags reported by MDN for a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusFlags {
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub deprecated: bool,
}

/// Feature status: MDN's flags, or caniuse's opaque standardisation status code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeatureStatus {
    Flags(StatusFlags),
    Other(serde_json::Value),
}

impl FeatureStatus {
    pub fn flags(&self) -> Option<&StatusFlags> {
        match self {
            FeatureStatus::Flags(flags) => Some(flags),
            FeatureStatus::Other(_) => None,
        }
    }
}

/// A `version_added` / `version_removed` value in MDN data.
///
/// `true` means "supported, version unknown"; strings may carry a `≤`
/// prefix marking an upper-bound approximation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VersionValue {
    Flag(bool),
    Version(String),
}

impl VersionValue {
    /// Whether the value counts as present (`true` or a non-empty string).
    pub fn is_truthy(&self) -> bool {
        match self {
            VersionValue::Flag(flag) => *flag,
            VersionValue::Version(v) => !v.is_empty(),
        }
    }

    /// The version string with any `≤` markers removed.
    pub fn version(&self) -> Option<String> {
        match self {
            VersionValue::Flag(_) => None,
            VersionValue::Version(v) => Some(v.replace('≤', "")),
        }
    }
}

/// One MDN support statement for a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MdnSupportStatement {
    #[serde(default)]
    pub version_added: Option<VersionValue>,
    #[serde(default)]
    pub version_removed: Option<VersionValue>,
}

/// Support data for one browser: a single statement, or an ordered history
/// of statements (current syntax first, then prefixed or flagged variants).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MdnSupport {
    History(Vec<MdnSupportStatement>),
    Single(MdnSupportStatement),
}

/// Feature record returned by the companion MDN service.
///
/// A reply without `support` is rejected at decode time.
#[derive(Debug, Clone, Deserialize)]
pub struct MdnFeature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mdn_url: Option<String>,
    #[serde(default)]
    pub status: Option<FeatureStatus>,
    /// Support statements keyed by MDN browser key.
    pub support: HashMap<String, MdnSupport>,
}

/// Source-specific support table of a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSupport {
    /// caniuse: agent id → exact version → status string.
    Caniuse(HashMap<String, HashMap<String, String>>),
    /// MDN: browser key → support statement(s).
    Mdn(HashMap<String, MdnSupport>),
}

/// A feature ready for support resolution and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: String,
    pub description: Option<String>,
    /// Canonical page for the feature; the title link is omitted without it.
    pub url: Option<String>,
    pub usage_perc_y: Option<f64>,
    pub usage_perc_a: Option<f64>,
    pub status: Option<FeatureStatus>,
    pub support: FeatureSupport,
}

impl Feature {
    pub fn from_caniuse(feature_id: &str, record: CaniuseFeature) -> Self {
        Self {
            title: record.title,
            description: record.description,
            url: Some(format!("https://caniuse.com/#feat={}", feature_id)),
            usage_perc_y: record.usage_perc_y,
            usage_perc_a: record.usage_perc_a,
            status: record.status,
            support: FeatureSupport::Caniuse(record.stats),
        }
    }

    pub fn from_mdn(record: MdnFeature) -> Self {
        Self {
            title: record.title,
            description: record.description,
            url: record.mdn_url.filter(|u| !u.is_empty()),
            usage_perc_y: None,
            usage_perc_a: None,
            status: record.status,
            support: FeatureSupport::Mdn(record.support),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_mdn_record() {
        let json = r#"{
            "title": "gap",
            "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/gap",
            "status": {"experimental": false, "standard_track": true, "deprecated": false},
            "support": {
                "chrome": {"version_added": "84"},
                "firefox": [
                    {"version_added": "63"},
                    {"version_added": "61", "prefix": "-moz-", "version_removed": "62"}
                ],
                "ie": {"version_added": false},
                "safari_ios": {"version_added": "≤14.5"},
                "edge": {"version_added": true}
            }
        }"#;

        let record: MdnFeature = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "gap");
        assert!(matches!(record.support["firefox"], MdnSupport::History(ref h) if h.len() == 2));
        assert_eq!(
            record.support["edge"],
            MdnSupport::Single(MdnSupportStatement {
                version_added: Some(VersionValue::Flag(true)),
                ..Default::default()
            })
        );

        let feature = Feature::from_mdn(record);
        assert_eq!(
            feature.url.as_deref(),
            Some("https://developer.mozilla.org/docs/Web/CSS/gap")
        );
        assert!(!feature.status.unwrap().flags().unwrap().experimental);
    }

    #[test]
    fn test_mdn_record_requires_support() {
        let result = serde_json::from_str::<MdnFeature>(
            r#"{"title": "gap", "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/gap"}"#,
        );
        assert!(result.is_err());

        let record: MdnFeature = serde_json::from_str(r#"{"support": {}}"#).unwrap();
        assert!(record.support.is_empty());
    }

    #[test]
    fn test_caniuse_status_string_is_not_flags() {
        let record: CaniuseFeature =
            serde_json::from_str(r#"{"title": "Flexbox", "status": "cr"}"#).unwrap();
        let feature = Feature::from_caniuse("flexbox", record);
        assert_eq!(feature.url.as_deref(), Some("https://caniuse.com/#feat=flexbox"));
        assert_eq!(feature.status.unwrap().flags(), None);
    }

    #[test]
    fn test_version_value_strips_upper_bound_marker() {
        let value = VersionValue::Version("≤37".to_string());
        assert!(value.is_truthy());
        assert_eq!(value.version().as_deref(), Some("37"));
        assert!(!VersionValue::Flag(false).is_truthy());
        assert!(!VersionValue::Version(String::new()).is_truthy());
    }
}
