//! Static asset constants (CSS and JavaScript).

/// Stylesheet shared by the embed and picker pages.
pub const CSS: &str = include_str!("embed.css");

/// Height reporting and colour toggle inside the embed iframe.
pub const EMBED_JS: &str = include_str!("embed.js");

/// Clipboard handling for the picker page.
pub const PICKER_JS: &str = include_str!("picker.js");

/// Script host pages include to turn snippets into iframes.
pub const LOADER_JS: &str = include_str!("caniuse-embed.js");
