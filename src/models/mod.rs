//! Data models for the embed pipeline.

mod browser;
mod dataset;
mod feature;
mod options;
mod source;
mod support;

pub use browser::Browser;
pub use dataset::{Agent, CaniuseDataset, CaniuseFeature, FeatureSummary, VersionEntry};
pub use feature::{
    Feature, FeatureStatus, FeatureSupport, MdnFeature, MdnSupport, MdnSupportStatement,
    StatusFlags, VersionValue,
};
pub use options::{EmbedOptions, Period, PeriodOffset, DEFAULT_PERIODS};
pub use source::{DataSource, FetchedFeature, MDN_FEATURE_PREFIX};
pub use support::{BrowserTables, SupportCode, SupportMatrix, SupportStatus};
