//! caniuse-embed - embeddable browser support tables.
//!
//! Renders caniuse.com or MDN browser-compat-data for one feature as a small
//! HTML table meant to live inside an iframe, and serves a companion page that
//! builds the embed snippet for a host page.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod server;
pub mod services;
pub mod utils;

pub use error::{EmbedError, Result};
