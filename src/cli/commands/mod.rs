//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod render;
mod serve;
mod snippet;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{load_settings_with_options, LoadOptions};
use crate::models::DataSource;

#[derive(Parser)]
#[command(name = "caniuse-embed")]
#[command(about = "Embeddable browser support tables from caniuse.com and MDN")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Data source named on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Infer from the feature id (`mdn-` prefix selects MDN)
    #[default]
    Auto,
    /// caniuse.com dataset
    Caniuse,
    /// MDN browser-compat-data through the companion API
    Mdn,
}

impl SourceArg {
    fn resolve(self, feature_id: &str) -> DataSource {
        match self {
            SourceArg::Auto => DataSource::from_feature_id(feature_id),
            SourceArg::Caniuse => DataSource::Caniuse,
            SourceArg::Mdn => DataSource::Mdn,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the embed web server
    Serve {
        /// Address to bind (port, host, or host:port; defaults to the configured bind)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Render the embed page for a feature and print the HTML
    Render {
        /// Feature id (e.g. "flexbox" or "mdn-css__properties__gap")
        feature: String,
        /// Periods to show, comma-separated (e.g. "future_1,current,past_1")
        #[arg(short, long, value_delimiter = ',')]
        periods: Vec<String>,
        /// Data source
        #[arg(long, value_enum, default_value = "auto")]
        source: SourceArg,
        /// Use the accessible colour scheme
        #[arg(long)]
        accessible_colours: bool,
        /// Static screenshot mode (date stamp, no toggle)
        #[arg(long)]
        screenshot: bool,
        /// Base path of a pre-rendered image shown while loading
        #[arg(long)]
        image_base: Option<String>,
    },

    /// Print the snippet a host page uses to embed a feature
    Snippet {
        /// Feature id
        feature: String,
        /// Extra periods besides "current", comma-separated
        #[arg(short, long, value_delimiter = ',')]
        periods: Vec<String>,
        /// Use the accessible colour scheme
        #[arg(long)]
        accessible_colours: bool,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let settings = load_settings_with_options(options).await;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Render {
            feature,
            periods,
            source,
            accessible_colours,
            screenshot,
            image_base,
        } => {
            let render_options = render::RenderOptions {
                data_source: source.resolve(&feature),
                feature,
                periods,
                accessible_colours,
                screenshot,
                image_base,
            };
            render::cmd_render(&settings, render_options).await
        }
        Commands::Snippet {
            feature,
            periods,
            accessible_colours,
        } => snippet::cmd_snippet(&settings, &feature, &periods, accessible_colours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "caniuse-embed",
            "render",
            "mdn-css__properties__gap",
            "--periods",
            "current,past_1",
            "--screenshot",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                feature,
                periods,
                source,
                screenshot,
                ..
            } => {
                assert_eq!(feature, "mdn-css__properties__gap");
                assert_eq!(periods, vec!["current", "past_1"]);
                assert_eq!(source.resolve(&feature), DataSource::Mdn);
                assert!(screenshot);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["caniuse-embed", "serve", "-c", "/tmp/embed.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/embed.toml")));
        assert!(matches!(cli.command, Commands::Serve { bind: None }));
    }

    #[test]
    fn test_source_arg_overrides_prefix() {
        assert_eq!(SourceArg::Caniuse.resolve("mdn-foo"), DataSource::Caniuse);
        assert_eq!(SourceArg::Auto.resolve("flexbox"), DataSource::Caniuse);
    }
}
