//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL of the CirquloFit backend (without the `/api` prefix)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Local storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorageSettings {
    /// Directory for the stats cache and session token.
    /// Empty means the global config directory.
    #[serde(default)]
    pub dir: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StorageSettings {
    /// Configured directory, None when left empty
    pub fn custom_dir(&self) -> Option<PathBuf> {
        let dir = self.dir.trim();
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    }
}
