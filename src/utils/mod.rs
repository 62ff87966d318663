//! Shared utility functions.
//!
//! - `html`: HTML escaping for safe rendering
//! - `format`: human-readable dates and percentages

mod format;
mod html;

pub use format::{format_percent, format_stamp_date};
pub use html::{escape_angle_brackets, html_escape};
