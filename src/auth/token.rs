//! Bearer token persistence

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::storage;

/// Non-blank bearer token for the backend
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// None for empty or whitespace-only input
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Token file (`<dir>/token`)
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("token"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, None when missing, blank or unreadable
    pub fn load(&self) -> Option<SessionToken> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => SessionToken::new(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read session token {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, token: &SessionToken) -> Result<()> {
        storage::write_atomic(&self.path, token.as_str())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&self.path, perms) {
                tracing::warn!("Failed to restrict token file permissions: {}", e);
            }
        }

        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        storage::remove_if_exists(&self.path)
    }
}
