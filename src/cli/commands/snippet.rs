//! Print the host-page snippet for a feature.

use console::style;

use crate::config::Settings;
use crate::render::{loader_tag, EmbedSnippet};

/// Print the loader tag, the snippet and the direct embed URL.
pub fn cmd_snippet(
    settings: &Settings,
    feature: &str,
    periods: &[String],
    accessible_colours: bool,
) -> anyhow::Result<()> {
    if feature.is_empty() {
        anyhow::bail!("Feature id is required");
    }

    let snippet = EmbedSnippet::new(feature, periods, accessible_colours);

    println!("{}", style("1. Add the script once per page:").bold());
    println!("{}", loader_tag(&settings.site_url));
    println!();
    println!("{}", style("2. Place the embed where it should appear:").bold());
    println!("{}", snippet.html());
    println!();
    println!(
        "{} {}",
        style("Direct URL:").dim(),
        snippet.embed_url(&settings.site_url)
    );

    Ok(())
}
