//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{Config, DEFAULT_CONFIG};
use crate::storage;

impl Config {
    /// Get the global config directory path (~/.cirqulofit/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cirqulofit")
    }

    /// Get the global config file path (~/.cirqulofit/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        storage::write_atomic(path, &content)
    }

    /// Load global configuration from ~/.cirqulofit/config.toml
    /// If no config exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::global_config_path())
    }

    /// Load configuration from `path`, creating it with defaults when missing.
    /// Environment overrides are applied on top.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::auto_init(path)?;
        }

        Ok(Self::from_file(path)?.with_env_overrides())
    }

    /// Write the commented default config to `path`
    ///
    /// Fails if the file exists, unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "Config already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }
        storage::write_atomic(path, DEFAULT_CONFIG)
    }

    fn auto_init(path: &Path) -> Result<()> {
        match Self::write_default(path, false) {
            Ok(()) => {
                eprintln!("Created {}", path.display());
                Ok(())
            }
            // Another process created it first
            Err(_) if path.exists() => Ok(()),
            Err(e) => Err(e),
        }
    }
}
