//! HTTP request handlers for the web server.

mod api;
mod embed;
mod picker;
mod static_files;

pub use api::api_features;
pub use embed::embed_page;
pub use picker::picker_page;
pub use static_files::{serve_css, serve_embed_js, serve_loader_js, serve_picker_js};
