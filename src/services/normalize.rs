//! Resolve each requested period to a browser version and its usage share.

use std::collections::HashMap;

use crate::models::{Agent, Browser, BrowserTables, Period, PeriodOffset};

/// Resolve versions and usage for every tracked browser and period.
///
/// Never fails: periods that run off either end of a browser's history,
/// unrecognised period names, and browsers missing from `agents` all leave
/// the entry absent.
pub fn resolve_browser_tables(agents: &HashMap<String, Agent>, periods: &[Period]) -> BrowserTables {
    let mut tables = BrowserTables::default();

    for browser in Browser::ALL {
        let versions = tables.versions.entry(browser).or_default();
        let usage = tables.usage.entry(browser).or_default();

        let Some(agent) = agents.get(browser.caniuse_key()) else {
            tracing::debug!("No agent data for {}", browser);
            continue;
        };

        for period in periods {
            if let Some(version) = resolve_version(agent, period) {
                usage.insert(period.name().to_string(), format_usage(agent, &version));
                versions.insert(period.name().to_string(), version);
            }
        }
    }

    tables
}

/// The version a period refers to in one agent's history.
pub fn resolve_version(agent: &Agent, period: &Period) -> Option<String> {
    match period.offset()? {
        PeriodOffset::Current => {
            Some(agent.current_version.clone()).filter(|v| !v.is_empty())
        }
        PeriodOffset::Past(n) => {
            let index = agent.current_index()?.checked_sub(n)?;
            agent.version_list.get(index).map(|v| v.version.clone())
        }
        PeriodOffset::Future(n) => {
            let index = agent.current_index()?.checked_add(n)?;
            agent.version_list.get(index).map(|v| v.version.clone())
        }
    }
}

/// Usage share of a version, two decimals, or `"0"` when unknown or zero.
fn format_usage(agent: &Agent, version: &str) -> String {
    match agent.usage_global.get(version).copied().flatten() {
        Some(usage) if usage != 0.0 => format!("{:.2}", usage),
        _ => "0".to_string(),
    }
}
