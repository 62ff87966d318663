//! Formatting utilities.

use chrono::NaiveDate;

/// Date stamp shown in screenshot mode, e.g. `19 October 2026`.
pub fn format_stamp_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Shortest decimal form of a percentage (`97.1`, `0.5`, `0`).
pub fn format_percent(value: f64) -> String {
    format!("{}", value)
}
