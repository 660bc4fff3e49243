//! Data models for gamification stats
//!
//! [`UserStats`] is the live, in-memory aggregate. [`StatsSnapshot`] is what
//! goes into the local cache: it carries no catalog display data and its
//! derived fields are recomputed on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::achievements::{Achievement, AchievementId, Level, derive_level, xp_to_next_level};
use crate::api::WorkoutStats;

/// Per-user unlock state for one catalog achievement
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementState {
    pub id: AchievementId,
    pub unlocked: bool,
    /// Set exactly once, when `unlocked` flips to true
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl AchievementState {
    pub fn locked(id: AchievementId) -> Self {
        Self {
            id,
            unlocked: false,
            unlocked_at: None,
        }
    }

    /// Static catalog entry for this state
    pub fn definition(&self) -> &'static Achievement {
        Achievement::get(self.id)
    }

    /// Fresh catalog copy with everything locked
    pub fn catalog() -> Vec<Self> {
        AchievementId::all().iter().copied().map(Self::locked).collect()
    }
}

/// Aggregate gamification stats owned by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub total_workouts: u32,
    pub total_exercises: u32,
    pub streak: u32,
    pub achievements: Vec<AchievementState>,
    /// Percentage towards the next level, 0-100
    pub level_progress: f64,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_to_next_level: xp_to_next_level(1, 0),
            total_workouts: 0,
            total_exercises: 0,
            streak: 0,
            achievements: AchievementState::catalog(),
            level_progress: 0.0,
        }
    }
}

impl UserStats {
    /// Display metadata for the current level (name, emoji, color)
    pub fn level_info(&self) -> &'static Level {
        Level::info(self.level)
    }

    /// Next level in the table, None at max level and beyond
    pub fn next_level_info(&self) -> Option<&'static Level> {
        Level::next(self.level)
    }

    pub fn achievement(&self, id: AchievementId) -> Option<&AchievementState> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievement(id).is_some_and(|a| a.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Recompute `xp_to_next_level` and `level_progress` from level, xp and workouts
    pub(crate) fn refresh_derived(&mut self) {
        self.xp_to_next_level = xp_to_next_level(self.level, self.xp);
        self.level_progress = Level::progress(self.total_workouts, self.level);
    }

    /// Build stats from the backend summary.
    ///
    /// Level and progress are taken as reported; achievements start locked
    /// and are evaluated by the caller.
    pub fn from_remote(remote: &WorkoutStats) -> Self {
        let level = remote.level.max(1);
        Self {
            level,
            xp: remote.total_xp,
            xp_to_next_level: xp_to_next_level(level, remote.total_xp),
            total_workouts: remote.total_workouts,
            total_exercises: remote.total_exercises,
            streak: remote.current_streak,
            achievements: AchievementState::catalog(),
            level_progress: sanitize_progress(remote.level_progress),
        }
    }

    /// Rebuild stats from a cached snapshot.
    ///
    /// Only counters, the level floor and unlock records are trusted; every
    /// derived field is recomputed.
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        let mut achievements = AchievementState::catalog();
        for record in &snapshot.achievements {
            let Some(id) = AchievementId::parse(&record.id) else {
                tracing::debug!("Dropping unknown cached achievement: {}", record.id);
                continue;
            };
            if let Some(state) = achievements.iter_mut().find(|a| a.id == id) {
                state.unlocked = record.unlocked;
                state.unlocked_at = match (record.unlocked, record.unlocked_at) {
                    (false, _) => None,
                    (true, Some(at)) => Some(at),
                    (true, None) => {
                        tracing::debug!("Cached achievement {} has no unlock time, stamping now", id);
                        Some(Utc::now())
                    }
                };
            }
        }

        let level = derive_level(snapshot.level, snapshot.xp, snapshot.total_workouts);

        let mut stats = Self {
            level,
            xp: snapshot.xp,
            xp_to_next_level: 0,
            total_workouts: snapshot.total_workouts,
            total_exercises: snapshot.total_exercises,
            streak: snapshot.streak,
            achievements,
            level_progress: 0.0,
        };
        stats.refresh_derived();
        stats
    }

    /// Snapshot for the local cache
    pub fn to_snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            version: StatsSnapshot::VERSION,
            level: self.level,
            xp: self.xp,
            xp_to_next_level: self.xp_to_next_level,
            total_workouts: self.total_workouts,
            total_exercises: self.total_exercises,
            streak: self.streak,
            level_progress: self.level_progress,
            achievements: self
                .achievements
                .iter()
                .map(|a| AchievementRecord {
                    id: a.id.as_str().to_string(),
                    unlocked: a.unlocked,
                    unlocked_at: a.unlocked_at,
                })
                .collect(),
        }
    }

    /// Reuse earlier unlock times for achievements unlocked in both states
    pub(crate) fn restore_unlock_times(&mut self, previous: &[AchievementState]) {
        for state in self.achievements.iter_mut().filter(|a| a.unlocked) {
            let earlier = previous
                .iter()
                .find(|p| p.id == state.id && p.unlocked)
                .and_then(|p| p.unlocked_at);
            if earlier.is_some() {
                state.unlocked_at = earlier;
            }
        }
    }
}

fn sanitize_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Persisted unlock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Serialized form of [`UserStats`] stored in the local cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default = "default_snapshot_version")]
    pub version: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    /// Written for readers of the file, ignored on load
    #[serde(default)]
    pub xp_to_next_level: u32,
    #[serde(default)]
    pub total_workouts: u32,
    #[serde(default)]
    pub total_exercises: u32,
    #[serde(default)]
    pub streak: u32,
    /// Written for readers of the file, ignored on load
    #[serde(default)]
    pub level_progress: f64,
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,
}

impl StatsSnapshot {
    pub const VERSION: u32 = 1;
}

fn default_snapshot_version() -> u32 {
    StatsSnapshot::VERSION
}

fn default_level() -> u32 {
    1
}
