//! The embed page rendered inside the host's iframe.

use axum::{
    extract::{RawQuery, State},
    response::Html,
};

use super::super::template_structs::EmbedTemplate;
use super::super::AppState;
use crate::models::EmbedOptions;
use crate::render::build_embed_view;
use crate::services::load_embed;
use askama::Template;

/// Render the embed for the query string's options.
///
/// Fetch failures still produce a page; only the message changes.
pub async fn embed_page(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let options = EmbedOptions::from_query(query.as_deref().unwrap_or(""));
    let embed = load_embed(&state.client, &options).await;
    let view = build_embed_view(
        &options,
        &embed,
        &state.settings.site_url,
        chrono::Local::now().date_naive(),
    );

    let template = EmbedTemplate::from_view(&view);
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}
