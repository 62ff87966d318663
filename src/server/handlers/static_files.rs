//! Static file serving handlers.

use axum::{http::header, response::IntoResponse};

use super::super::assets;

const JS_CONTENT_TYPE: &str = "application/javascript";

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Serve the script loaded inside the embed iframe.
pub async fn serve_embed_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, JS_CONTENT_TYPE)], assets::EMBED_JS)
}

/// Serve the picker page script.
pub async fn serve_picker_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, JS_CONTENT_TYPE)], assets::PICKER_JS)
}

/// Serve the host page loader.
pub async fn serve_loader_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, JS_CONTENT_TYPE)], assets::LOADER_JS)
}
