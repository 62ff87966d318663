//! Feature picker and snippet generator.

use axum::{
    extract::{RawQuery, State},
    response::Html,
};

use super::super::template_structs::IndexTemplate;
use super::super::AppState;
use crate::render::EmbedSnippet;
use askama::Template;

/// Picker page; shows the generated snippet once a feature is submitted.
pub async fn picker_page(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let snippet = EmbedSnippet::from_query(query.as_deref().unwrap_or(""));

    let (features, has_list_error) = match state.client.feature_list().await {
        Ok(features) => (features, false),
        Err(e) => {
            tracing::error!("Failed to load feature list: {}", e);
            (Vec::new(), true)
        }
    };

    let template = IndexTemplate::new(
        &state.settings.site_url,
        &features,
        snippet.as_ref(),
        has_list_error,
    );
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
