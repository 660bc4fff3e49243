//! Configuration loading and management

mod io;
mod settings;

pub use settings::{ApiSettings, StorageSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "CIRQULOFIT_API_URL";

/// Commented default configuration written by `init` and on first load
pub const DEFAULT_CONFIG: &str = r#"# CirquloFit configuration

[api]
# Backend base URL (CIRQULOFIT_API_URL overrides this)
base_url = "http://localhost:8000"
# Request timeout in seconds
timeout_secs = 10

[storage]
# Directory for the stats cache and session token (empty: ~/.cirqulofit)
dir = ""
"#;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Backend settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Local storage settings
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment overrides (`CIRQULOFIT_API_URL`)
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_api_url(std::env::var(API_URL_ENV).ok());
        self
    }

    fn apply_api_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Using backend URL from {}: {}", API_URL_ENV, url);
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Directory holding the stats cache and session token
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .custom_dir()
            .unwrap_or_else(Self::global_config_dir)
    }
}
