//! Data source selection and source-specific retrieval.

use std::fmt;
use std::sync::Arc;

use super::{CaniuseDataset, Feature, MdnFeature};
use crate::error::{EmbedError, Result};
use crate::services::CompatClient;

/// Feature ids with this prefix are looked up in MDN browser-compat-data.
pub const MDN_FEATURE_PREFIX: &str = "mdn-";

/// Where a feature's compatibility data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Caniuse,
    Mdn,
}

/// A fetched feature together with the dataset its periods resolve against.
///
/// Periods always resolve against caniuse's browser history, whichever
/// source supplied the feature.
#[derive(Debug, Clone)]
pub struct FetchedFeature {
    pub feature: Feature,
    pub dataset: Arc<CaniuseDataset>,
}

impl DataSource {
    pub fn from_feature_id(feature_id: &str) -> Self {
        if feature_id.starts_with(MDN_FEATURE_PREFIX) {
            DataSource::Mdn
        } else {
            DataSource::Caniuse
        }
    }

    /// Tag used as a body CSS class.
    pub fn tag(&self) -> &'static str {
        match self {
            DataSource::Caniuse => "caniuse",
            DataSource::Mdn => "mdn",
        }
    }

    /// Fetch the feature record and browser history for `feature_id`.
    pub async fn fetch(&self, client: &CompatClient, feature_id: &str) -> Result<FetchedFeature> {
        match self {
            DataSource::Caniuse => {
                let dataset = client.dataset().await?;
                let record = dataset
                    .data
                    .get(feature_id)
                    .cloned()
                    .ok_or_else(|| EmbedError::FeatureNotFound(feature_id.to_string()))?;

                Ok(FetchedFeature {
                    feature: Feature::from_caniuse(feature_id, record),
                    dataset,
                })
            }
            DataSource::Mdn => {
                let record: MdnFeature = client.mdn_feature(feature_id).await?;
                let dataset = client.dataset().await?;

                Ok(FetchedFeature {
                    feature: Feature::from_mdn(record),
                    dataset,
                })
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
