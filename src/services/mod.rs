//! The embed pipeline: fetch, normalize, resolve support.
//!
//! - `fetcher`: HTTP access to the caniuse dataset and the companion API
//! - `normalize`: period → browser version and usage
//! - `support`: (browser, period) → support status, per data source
//! - `pipeline`: runs the steps in order and owns the single error boundary

mod cache;
mod fetcher;
mod normalize;
mod pipeline;
mod support;

pub use cache::DatasetCache;
pub use fetcher::CompatClient;
pub use normalize::{resolve_browser_tables, resolve_version};
pub use pipeline::{load_embed, resolve_embed, EmbedState, ResolvedEmbed};
pub use support::{parse_leading_float, resolve_support};
