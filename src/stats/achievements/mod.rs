//! Gamification system: Achievements, XP, Levels and Streaks
//!
//! This module provides the gamification layer on top of the stats model.

mod checker;
mod definitions;
mod levels;
mod manager;

pub use checker::{check_achievements, predicate_met};
pub use definitions::{Achievement, AchievementId, ACHIEVEMENTS};
pub use levels::{
    derive_level, level_for_xp, xp_to_next_level, Level, XpRewards, LEVELS, XP_PER_LEVEL,
};
pub use manager::{GamificationEngine, GamificationEvent, LevelUp, UnlockedAchievement};
