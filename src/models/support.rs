//! Per-browser, per-period tables produced by the pipeline.

use std::collections::BTreeMap;
use std::fmt;

use super::Browser;

/// Support status codes used by caniuse and by the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportCode {
    Supported,
    Unsupported,
    Partial,
    Unknown,
    Prefixed,
    Flagged,
}

impl SupportCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportCode::Supported => "y",
            SupportCode::Unsupported => "n",
            SupportCode::Partial => "a",
            SupportCode::Unknown => "u",
            SupportCode::Prefixed => "x",
            SupportCode::Flagged => "d",
        }
    }
}

impl fmt::Display for SupportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of one table cell.
///
/// caniuse stores space-separated codes plus note references, e.g.
/// `"a x #2"`; MDN resolution always produces a single code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportStatus(String);

impl SupportStatus {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, code: SupportCode) -> bool {
        self.0.split_whitespace().any(|token| token == code.as_str())
    }

    /// Codes as CSS classes, without note references.
    pub fn css_classes(&self) -> String {
        self.0
            .split_whitespace()
            .filter(|token| !token.starts_with('#'))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<SupportCode> for SupportStatus {
    fn from(code: SupportCode) -> Self {
        Self(code.as_str().to_string())
    }
}

/// Resolved version and usage for each (browser, period).
///
/// A missing entry means the period runs past the browser's known history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserTables {
    pub versions: BTreeMap<Browser, BTreeMap<String, String>>,
    pub usage: BTreeMap<Browser, BTreeMap<String, String>>,
}

impl BrowserTables {
    pub fn version(&self, browser: Browser, period: &str) -> Option<&str> {
        self.versions
            .get(&browser)
            .and_then(|periods| periods.get(period))
            .map(String::as_str)
    }

    pub fn usage(&self, browser: Browser, period: &str) -> Option<&str> {
        self.usage
            .get(&browser)
            .and_then(|periods| periods.get(period))
            .map(String::as_str)
    }
}

/// Support status for each (browser, period). Absent cells render without a
/// status class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportMatrix {
    cells: BTreeMap<Browser, BTreeMap<String, SupportStatus>>,
}

impl SupportMatrix {
    pub fn get(&self, browser: Browser, period: &str) -> Option<&SupportStatus> {
        self.cells
            .get(&browser)
            .and_then(|periods| periods.get(period))
    }

    pub fn insert(&mut self, browser: Browser, period: &str, status: SupportStatus) {
        self.cells
            .entry(browser)
            .or_default()
            .insert(period.to_string(), status);
    }

    /// Whether any cell carries `code`.
    pub fn any(&self, code: SupportCode) -> bool {
        self.cells
            .values()
            .flat_map(|periods| periods.values())
            .any(|status| status.contains(code))
    }
}
