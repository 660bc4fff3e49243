//! Local persisted cache for the stats snapshot
//!
//! One named entry (`cirqulofit-stats`) holds the JSON snapshot. Reads never
//! fail: a missing or corrupted entry reads as `None`.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::models::StatsSnapshot;
use crate::storage;

/// Name of the cache entry holding the stats snapshot
pub const STATS_ENTRY: &str = "cirqulofit-stats";

/// Durable storage tier for [`StatsSnapshot`]
pub trait StatsCache {
    /// Last written snapshot, None when absent or unreadable
    fn read(&self) -> Option<StatsSnapshot>;

    /// Replace the stored snapshot
    fn write(&self, snapshot: &StatsSnapshot) -> Result<()>;

    /// Delete the stored snapshot (missing entry is not an error)
    fn remove(&self) -> Result<()>;
}

fn parse_snapshot(raw: &str, origin: &str) -> Option<StatsSnapshot> {
    match serde_json::from_str(raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!("Ignoring malformed stats snapshot in {}: {}", origin, e);
            None
        }
    }
}

/// Snapshot stored as `<dir>/cirqulofit-stats.json`
#[derive(Debug, Clone)]
pub struct FileStatsCache {
    path: PathBuf,
}

impl FileStatsCache {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STATS_ENTRY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsCache for FileStatsCache {
    fn read(&self) -> Option<StatsSnapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };
        parse_snapshot(&raw, &self.path.display().to_string())
    }

    fn write(&self, snapshot: &StatsSnapshot) -> Result<()> {
        let content =
            serde_json::to_string_pretty(snapshot).context("Failed to serialize stats snapshot")?;
        storage::write_atomic(&self.path, &content)
    }

    fn remove(&self) -> Result<()> {
        storage::remove_if_exists(&self.path)
    }
}

/// In-process cache, for embedding without a profile directory and for tests
#[derive(Debug, Default)]
pub struct MemoryStatsCache {
    entry: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-seeded with a raw entry (may be malformed on purpose)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let cache = Self::default();
        cache.entry.replace(Some(raw.into()));
        cache
    }

    /// Raw stored entry
    pub fn raw(&self) -> Option<String> {
        self.entry.borrow().clone()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make every following write fail, like a full storage quota
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StatsCache for MemoryStatsCache {
    fn read(&self) -> Option<StatsSnapshot> {
        let entry = self.entry.borrow();
        parse_snapshot(entry.as_deref()?, STATS_ENTRY)
    }

    fn write(&self, snapshot: &StatsSnapshot) -> Result<()> {
        if self.fail_writes.get() {
            anyhow::bail!("storage quota exceeded");
        }
        let content = serde_json::to_string(snapshot).context("Failed to serialize stats snapshot")?;
        self.entry.replace(Some(content));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        self.entry.replace(None);
        Ok(())
    }
}
