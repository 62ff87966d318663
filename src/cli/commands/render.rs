//! One-off render of the embed page to stdout.

use console::style;

use crate::config::Settings;
use crate::models::{DataSource, EmbedOptions, Period};
use crate::render::build_embed_view;
use crate::services::{load_embed, CompatClient, EmbedState};

/// Options collected from the `render` subcommand.
pub struct RenderOptions {
    pub feature: String,
    pub periods: Vec<String>,
    pub data_source: DataSource,
    pub accessible_colours: bool,
    pub screenshot: bool,
    pub image_base: Option<String>,
}

impl RenderOptions {
    fn embed_options(&self) -> EmbedOptions {
        let mut options = EmbedOptions::for_feature(&self.feature);
        options.data_source = self.data_source;
        if !self.periods.is_empty() {
            options.periods = self.periods.iter().map(Period::new).collect();
        }
        options.accessible_colours = self.accessible_colours;
        options.screenshot = self.screenshot;
        options.image_base = self.image_base.clone().filter(|b| !b.is_empty() && b != "none");
        options
    }
}

/// Render the embed page and print it.
pub async fn cmd_render(settings: &Settings, options: RenderOptions) -> anyhow::Result<()> {
    let client = CompatClient::new(settings)?;
    let embed_options = options.embed_options();

    let state = load_embed(&client, &embed_options).await;
    if matches!(state, EmbedState::Failed) {
        eprintln!(
            "{} Could not load {} from {}",
            style("✗").red(),
            options.feature,
            embed_options.data_source
        );
    }

    let view = build_embed_view(
        &embed_options,
        &state,
        &settings.site_url,
        chrono::Local::now().date_naive(),
    );
    println!("{}", crate::server::render_embed_page(&view)?);

    Ok(())
}
