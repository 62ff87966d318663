//! HTML escaping utilities.

/// Escape HTML special characters for safe rendering.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape only angle brackets, leaving entities already present intact.
pub fn escape_angle_brackets(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
