//! Error types for the embed pipeline.

use thiserror::Error;

/// Failure anywhere between fetching compatibility data and rendering it.
///
/// The pipeline does not distinguish between these when reporting to the
/// embed page; every variant ends up as the "feature not found" state.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Feature not found: {0}")]
    FeatureNotFound(String),
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
