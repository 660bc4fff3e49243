//! Gamification engine - core state logic
//!
//! Owns the live [`UserStats`] and mirrors every change into a [`StatsCache`].
//! Operations are synchronous and infallible: a failed cache write is logged
//! and the in-memory state stays authoritative.

use std::fmt;

use chrono::{DateTime, Utc};

use super::checker;
use super::definitions::Achievement;
use super::levels::{derive_level, XpRewards};
use crate::stats::cache::StatsCache;
use crate::stats::models::UserStats;

/// An achievement that was just unlocked
#[derive(Debug, Clone)]
pub struct UnlockedAchievement {
    pub achievement: &'static Achievement,
    pub unlocked_at: DateTime<Utc>,
}

/// A level up event
#[derive(Debug, Clone)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub new_title: String,
}

/// Events produced by engine operations, for notifications
#[derive(Debug, Clone)]
pub enum GamificationEvent {
    XpAwarded { amount: u32, reason: String },
    LevelUp(LevelUp),
    AchievementUnlocked(UnlockedAchievement),
    StreakExtended { count: u32 },
}

impl fmt::Display for GamificationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XpAwarded { amount, reason } => write!(f, "+{amount} XP ({reason})"),
            Self::LevelUp(up) => write!(
                f,
                "Level up! {} -> {} ({})",
                up.old_level, up.new_level, up.new_title
            ),
            Self::AchievementUnlocked(a) => write!(
                f,
                "{} Achievement unlocked: {} - {}",
                a.achievement.icon, a.achievement.name, a.achievement.description
            ),
            Self::StreakExtended { count } => write!(f, "🔥 Streak: {count}"),
        }
    }
}

/// Single writer for the user's gamification stats
pub struct GamificationEngine<C: StatsCache> {
    stats: UserStats,
    cache: C,
}

impl<C: StatsCache> GamificationEngine<C> {
    /// Engine at zeroed level 1 defaults (nothing written yet)
    pub fn new(cache: C) -> Self {
        Self::with_stats(UserStats::default(), cache)
    }

    pub fn with_stats(stats: UserStats, cache: C) -> Self {
        Self { stats, cache }
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Swap in hydrated stats and mirror them to the cache
    pub(crate) fn replace_stats(&mut self, stats: UserStats) {
        self.stats = stats;
        self.persist();
    }

    // ========================================
    // OPERATIONS
    // ========================================

    /// Add XP; the level follows `xp / 100 + 1` (or higher, see `derive_level`)
    pub fn add_experience(&mut self, amount: u32) -> Vec<GamificationEvent> {
        self.award(amount, "experience")
    }

    /// Add XP with a reason shown in the resulting event
    pub fn award(&mut self, amount: u32, reason: &str) -> Vec<GamificationEvent> {
        let mut events = Vec::new();
        self.apply_xp(amount, reason, &mut events);
        self.finish(events)
    }

    /// Count a finished workout session. Awards no XP by itself.
    pub fn complete_workout(&mut self) -> Vec<GamificationEvent> {
        let mut events = Vec::new();
        self.stats.total_workouts = self.stats.total_workouts.saturating_add(1);
        self.relevel(true, &mut events);
        self.finish(events)
    }

    /// Count a finished exercise and award the fixed exercise XP
    pub fn complete_exercise(&mut self) -> Vec<GamificationEvent> {
        let mut events = Vec::new();
        self.stats.total_exercises = self.stats.total_exercises.saturating_add(1);
        self.apply_xp(XpRewards::EXERCISE_BASE, "exercise completed", &mut events);
        self.finish(events)
    }

    /// Extend the activity streak by one. Resetting it is up to the caller.
    pub fn update_streak(&mut self) -> Vec<GamificationEvent> {
        self.stats.streak = self.stats.streak.saturating_add(1);
        let events = vec![GamificationEvent::StreakExtended {
            count: self.stats.streak,
        }];
        self.finish(events)
    }

    /// Re-evaluate achievements; idempotent
    pub fn check_achievements(&mut self) -> Vec<GamificationEvent> {
        let mut events = Vec::new();
        self.evaluate(&mut events);
        if !events.is_empty() {
            self.persist();
        }
        events
    }

    /// Back to level 1 defaults and drop the cache entry (logout)
    pub fn reset_stats(&mut self) {
        self.stats = UserStats::default();
        if let Err(e) = self.cache.remove() {
            tracing::warn!("Failed to remove cached stats: {:#}", e);
        }
        tracing::debug!("Stats reset to defaults");
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn apply_xp(&mut self, amount: u32, reason: &str, events: &mut Vec<GamificationEvent>) {
        self.stats.xp = self.stats.xp.saturating_add(amount);
        if amount > 0 {
            events.push(GamificationEvent::XpAwarded {
                amount,
                reason: reason.to_string(),
            });
        }
        self.relevel(false, events);
    }

    /// Recompute level and derived fields.
    ///
    /// Progress is only recomputed when the session count or the level moved,
    /// so a backend-reported progress survives plain XP awards.
    fn relevel(&mut self, sessions_changed: bool, events: &mut Vec<GamificationEvent>) {
        let old_level = self.stats.level;
        let new_level = derive_level(old_level, self.stats.xp, self.stats.total_workouts);
        self.stats.level = new_level;

        let refreshed_progress = self.stats.level_progress;
        self.stats.refresh_derived();
        if !sessions_changed && new_level == old_level {
            self.stats.level_progress = refreshed_progress;
        }

        if new_level > old_level {
            let title = self.stats.level_info().name.to_string();
            tracing::info!("Level up: {} -> {} ({})", old_level, new_level, title);
            events.push(GamificationEvent::LevelUp(LevelUp {
                old_level,
                new_level,
                new_title: title,
            }));
        }
    }

    fn evaluate(&mut self, events: &mut Vec<GamificationEvent>) {
        let now = Utc::now();
        for id in checker::check_achievements(&mut self.stats, now) {
            let achievement = Achievement::get(id);
            tracing::info!("Achievement unlocked: {}", id);
            events.push(GamificationEvent::AchievementUnlocked(UnlockedAchievement {
                achievement,
                unlocked_at: now,
            }));
        }
    }

    /// Every mutation ends here: achievements, then the cache write
    fn finish(&mut self, mut events: Vec<GamificationEvent>) -> Vec<GamificationEvent> {
        self.evaluate(&mut events);
        self.persist();
        events
    }

    fn persist(&self) {
        if let Err(e) = self.cache.write(&self.stats.to_snapshot()) {
            tracing::warn!("Failed to persist stats, keeping in-memory state: {:#}", e);
        }
    }
}
