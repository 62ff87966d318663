//! Shapes of the public caniuse dataset (`fulldata-json/data-2.0.json`).
//!
//! Only the fields the embed reads are modelled; everything else in the
//! payload is ignored during deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::FeatureStatus;

/// The full caniuse dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaniuseDataset {
    /// Per-browser release history and usage, keyed by caniuse agent id.
    #[serde(default)]
    pub agents: HashMap<String, Agent>,
    /// Feature records keyed by feature id.
    #[serde(default)]
    pub data: HashMap<String, CaniuseFeature>,
}

impl CaniuseDataset {
    /// Features as (id, title) pairs sorted by title.
    pub fn feature_summaries(&self) -> Vec<FeatureSummary> {
        let mut features: Vec<FeatureSummary> = self
            .data
            .iter()
            .map(|(id, feature)| FeatureSummary {
                id: id.clone(),
                title: feature.title.clone(),
            })
            .collect();
        features.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        features
    }
}

/// One browser's entry in the dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Agent {
    #[serde(default)]
    pub current_version: String,
    /// Chronologically ordered release history.
    #[serde(default)]
    pub version_list: Vec<VersionEntry>,
    /// Global usage percentage keyed by version string.
    #[serde(default)]
    pub usage_global: HashMap<String, Option<f64>>,
}

impl Agent {
    /// Index of the current release: the first entry whose era is zero.
    pub fn current_index(&self) -> Option<usize> {
        self.version_list.iter().position(|v| v.era == 0)
    }
}

/// A release in an agent's version history.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    /// Releases relative to the current one: negative is past, zero is
    /// current, positive is upcoming.
    #[serde(default)]
    pub era: i64,
}

/// A caniuse feature record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaniuseFeature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub usage_perc_y: Option<f64>,
    #[serde(default)]
    pub usage_perc_a: Option<f64>,
    #[serde(default)]
    pub status: Option<FeatureStatus>,
    /// Support status string keyed by agent id, then exact version.
    #[serde(default)]
    pub stats: HashMap<String, HashMap<String, String>>,
}

/// Entry in the feature picker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_agent_history() {
        let json = r#"{
            "agents": {
                "chrome": {
                    "browser": "Chrome",
                    "current_version": "120",
                    "usage_global": {"119": 1.5, "120": 34.8, "121": null},
                    "version_list": [
                        {"version": "119", "era": -1, "release_date": 1698710400},
                        {"version": "120", "era": 0, "release_date": 1701734400},
                        {"version": "121", "era": 1, "release_date": null}
                    ]
                }
            },
            "data": {}
        }"#;

        let dataset: CaniuseDataset = serde_json::from_str(json).unwrap();
        let chrome = &dataset.agents["chrome"];
        assert_eq!(chrome.current_version, "120");
        assert_eq!(chrome.current_index(), Some(1));
        assert_eq!(chrome.usage_global["120"], Some(34.8));
        assert_eq!(chrome.usage_global["121"], None);
    }

    #[test]
    fn test_feature_summaries_sorted_by_title() {
        let json = r#"{
            "agents": {},
            "data": {
                "grid": {"title": "CSS Grid Layout", "status": "cr", "stats": {}},
                "flexbox": {"title": "CSS Flexible Box Layout Module", "stats": {}}
            }
        }"#;

        let dataset: CaniuseDataset = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = dataset
            .feature_summaries()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["flexbox", "grid"]);
    }
}
