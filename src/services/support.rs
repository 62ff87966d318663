//! Determine a support status for every (browser, period) cell.

use std::collections::HashMap;

use crate::models::{
    Browser, BrowserTables, FeatureSupport, MdnSupport, MdnSupportStatement, Period,
    SupportCode, SupportMatrix, SupportStatus, VersionValue,
};

/// Build the support matrix using the strategy matching the feature's source.
pub fn resolve_support(
    support: &FeatureSupport,
    tables: &BrowserTables,
    periods: &[Period],
) -> SupportMatrix {
    let mut matrix = SupportMatrix::default();

    for browser in Browser::ALL {
        for period in periods {
            let Some(version) = tables.version(browser, period.name()) else {
                continue;
            };

            let status = match support {
                FeatureSupport::Caniuse(stats) => caniuse_status(stats, browser, version),
                FeatureSupport::Mdn(table) => Some(mdn_status(table, browser, version)),
            };

            if let Some(status) = status {
                matrix.insert(browser, period.name(), status);
            }
        }
    }

    matrix
}

/// Exact-version lookup in caniuse stats. No interpolation between versions.
fn caniuse_status(
    stats: &HashMap<String, HashMap<String, String>>,
    browser: Browser,
    version: &str,
) -> Option<SupportStatus> {
    stats
        .get(browser.caniuse_key())?
        .get(version)
        .filter(|status| !status.is_empty())
        .map(SupportStatus::new)
}

/// Supported / unsupported from MDN version ranges; `u` when MDN has no entry
/// for the browser at all.
fn mdn_status(table: &HashMap<String, MdnSupport>, browser: Browser, version: &str) -> SupportStatus {
    let Some(entry) = table.get(browser.mdn_key()) else {
        return SupportCode::Unknown.into();
    };

    let added = statement_value(entry, |s| s.version_added.as_ref());
    let removed = statement_value(entry, |s| s.version_removed.as_ref());
    let this_version = parse_leading_float(version);

    let mut supported = match added {
        Some(VersionValue::Flag(true)) => true,
        Some(added) => {
            let added = added.version().as_deref().and_then(parse_leading_float);
            if version == "TP" {
                added.is_some_and(|a| a > 0.0)
            } else {
                matches!((this_version, added), (Some(v), Some(a)) if v >= a)
            }
        }
        None => false,
    };

    if let Some(removed) = removed {
        let removed = removed.version().as_deref().and_then(parse_leading_float);
        if matches!((this_version, removed), (Some(v), Some(r)) if v <= r) {
            supported = false;
        }
    }

    if supported {
        SupportCode::Supported.into()
    } else {
        SupportCode::Unsupported.into()
    }
}

/// Pick a value from a support entry.
///
/// A single statement answers directly. For a history, the first statement is
/// preferred and the second used only when the first has no truthy value;
/// later statements are never consulted.
fn statement_value<'a>(
    entry: &'a MdnSupport,
    field: impl Fn(&'a MdnSupportStatement) -> Option<&'a VersionValue>,
) -> Option<&'a VersionValue> {
    let truthy = |s: &'a MdnSupportStatement| field(s).filter(|v| v.is_truthy());

    match entry {
        MdnSupport::Single(statement) => truthy(statement),
        MdnSupport::History(history) => history
            .first()
            .and_then(&truthy)
            .or_else(|| history.get(1).and_then(&truthy)),
    }
}

/// Parse the leading numeric part of a version string (`"15.4"`, `"12.2-12.5"`
/// → 12.2). Returns `None` when the string does not start with a number.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}
