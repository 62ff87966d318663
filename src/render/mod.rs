//! View-models for the embed page and the snippet generator.
//!
//! Nothing here touches HTTP or templates: the server applies these values to
//! askama templates, which keeps the rendering rules testable on their own.

mod snippet;
mod view;

pub use snippet::{loader_tag, EmbedSnippet, PICKER_PERIODS};
pub use view::{
    build_embed_view, height_message_prefix, sanitize_description, shorten_version, CellView,
    EmbedView, FeatureView, RowView,
};
