//! Configuration management using the prefer crate for file discovery.
//!
//! Effective settings are layered: built-in defaults, then a config file
//! (explicit path or auto-discovered), then environment variables, then CLI
//! flags applied by the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Public caniuse dataset with browser histories and feature records.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/Fyrd/caniuse/main/fulldata-json/data-2.0.json";

/// Companion service serving MDN feature records and the feature list.
pub const DEFAULT_API_URL: &str = "https://api.caniuse.wangjiezhe.com";

/// Public site that hosts the embed, used in attribution links and snippets.
pub const DEFAULT_SITE_URL: &str = "https://caniuse.wangjiezhe.com";

/// Default bind address for the server.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Name used for config file discovery.
const CONFIG_NAME: &str = "caniuse-embed";

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// URL of the caniuse `data-2.0.json` dataset.
    pub dataset_url: String,
    /// Base URL of the companion API (`/mdn-browser-compat-data`, `/features`).
    pub api_url: String,
    /// Public base URL of this embed service.
    pub site_url: String,
    /// User agent for outbound requests.
    pub user_agent: String,
    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub request_timeout: Option<u64>,
    /// How long a fetched dataset is reused, in seconds. Zero disables caching.
    pub dataset_cache_ttl: u64,
    /// Address the server binds to.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            user_agent: format!("caniuse-embed/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: None,
            dataset_cache_ttl: 0,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Configuration file structure. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Dataset cache TTL in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_cache_ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer for discovery.
    /// Falls back to an empty config when no file is found or it fails to parse.
    pub async fn load() -> Self {
        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        match ext {
            "toml" => {
                toml::from_str(contents).map_err(|e| format!("Failed to parse TOML config: {}", e))
            }
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e)),
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref url) = self.dataset_url {
            settings.dataset_url = url.clone();
        }
        if let Some(ref url) = self.api_url {
            settings.api_url = url.clone();
        }
        if let Some(ref url) = self.site_url {
            settings.site_url = url.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = Some(timeout);
        }
        if let Some(ttl) = self.dataset_cache_ttl {
            settings.dataset_cache_ttl = ttl;
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

/// Load settings with explicit options.
pub async fn load_settings_with_options(options: LoadOptions) -> Settings {
    let config = match options.config_path {
        Some(ref path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            match Config::load_from_path(Path::new(&expanded)).await {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{}: {}", expanded, e);
                    Config::default()
                }
            }
        }
        None => Config::load().await,
    };

    if let Some(ref path) = config.source_path {
        tracing::debug!("Loaded config from: {}", path.display());
    }

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

/// Apply `CANIUSE_EMBED_*` environment overrides. Empty values are ignored.
fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| var(key).filter(|v| !v.is_empty());

    if let Some(url) = lookup("CANIUSE_EMBED_DATASET_URL") {
        tracing::debug!("Using CANIUSE_EMBED_DATASET_URL from environment: {}", url);
        settings.dataset_url = url;
    }
    if let Some(url) = lookup("CANIUSE_EMBED_API_URL") {
        tracing::debug!("Using CANIUSE_EMBED_API_URL from environment: {}", url);
        settings.api_url = url;
    }
    if let Some(url) = lookup("CANIUSE_EMBED_SITE_URL") {
        settings.site_url = url;
    }
    if let Some(ttl) = lookup("CANIUSE_EMBED_CACHE_TTL") {
        match ttl.parse() {
            Ok(ttl) => settings.dataset_cache_ttl = ttl,
            Err(_) => tracing::warn!("Ignoring invalid CANIUSE_EMBED_CACHE_TTL: {}", ttl),
        }
    }
}
