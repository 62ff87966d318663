//! Runs Options → Fetcher → Normalizer → Support Resolver for one embed.

use tracing::{debug, error};

use super::{resolve_browser_tables, resolve_support, CompatClient};
use crate::error::Result;
use crate::models::{BrowserTables, EmbedOptions, Feature, SupportMatrix};

/// Everything the renderer needs for a successfully loaded feature.
#[derive(Debug, Clone)]
pub struct ResolvedEmbed {
    pub feature: Feature,
    pub tables: BrowserTables,
    pub support: SupportMatrix,
}

/// Outcome of loading an embed.
#[derive(Debug, Clone)]
pub enum EmbedState {
    /// No feature id was given; nothing was fetched.
    Empty,
    /// Any failure while fetching or resolving. Details are only logged.
    Failed,
    Resolved(ResolvedEmbed),
}

/// Fetch and resolve one feature. The first failure aborts the whole run.
pub async fn resolve_embed(
    client: &CompatClient,
    options: &EmbedOptions,
    feature_id: &str,
) -> Result<ResolvedEmbed> {
    let fetched = options.data_source.fetch(client, feature_id).await?;
    let tables = resolve_browser_tables(&fetched.dataset.agents, &options.periods);
    let support = resolve_support(&fetched.feature.support, &tables, &options.periods);

    Ok(ResolvedEmbed {
        feature: fetched.feature,
        tables,
        support,
    })
}

/// Load the embed for `options`, folding every error into `EmbedState::Failed`.
pub async fn load_embed(client: &CompatClient, options: &EmbedOptions) -> EmbedState {
    let Some(feature_id) = options.feature_id.as_deref() else {
        return EmbedState::Empty;
    };

    match resolve_embed(client, options, feature_id).await {
        Ok(resolved) => {
            debug!(
                "Resolved {} from {} for {} periods",
                feature_id,
                options.data_source,
                options.periods.len()
            );
            EmbedState::Resolved(resolved)
        }
        Err(e) => {
            error!("Failed to load feature {}: {}", feature_id, e);
            EmbedState::Failed
        }
    }
}
