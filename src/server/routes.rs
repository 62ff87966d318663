//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Picker and generated snippet
        .route("/", get(handlers::picker_page))
        // Iframe content
        .route("/embed", get(handlers::embed_page))
        .route("/api/features", get(handlers::api_features))
        // Static assets (CSS/JS)
        .route("/static/embed.css", get(handlers::serve_css))
        .route("/static/embed.js", get(handlers::serve_embed_js))
        .route("/static/picker.js", get(handlers::serve_picker_js))
        .route("/caniuse-embed.min.js", get(handlers::serve_loader_js))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
