//! Achievement checking logic
//!
//! Evaluates unlock predicates against the live stats. Unlocking is one-way:
//! an unlocked achievement is never touched again, whatever its predicate
//! says now.

use chrono::{DateTime, Utc};

use super::definitions::AchievementId;
use crate::stats::models::UserStats;

/// Whether the unlock condition for `id` holds for `stats`
pub fn predicate_met(id: AchievementId, stats: &UserStats) -> bool {
    match id {
        AchievementId::FirstWorkout => stats.total_workouts >= 1,
        AchievementId::Streak7 => stats.streak >= 7,
        AchievementId::Level5 => stats.level >= 5,
        AchievementId::Workout10 => stats.total_workouts >= 10,
        AchievementId::Streak30 => stats.streak >= 30,
    }
}

/// Unlock every locked achievement whose predicate holds.
///
/// Returns the ids unlocked by this call, in catalog order.
pub fn check_achievements(stats: &mut UserStats, now: DateTime<Utc>) -> Vec<AchievementId> {
    let due: Vec<AchievementId> = stats
        .achievements
        .iter()
        .filter(|a| !a.unlocked && predicate_met(a.id, stats))
        .map(|a| a.id)
        .collect();

    for state in stats.achievements.iter_mut() {
        if due.contains(&state.id) {
            state.unlocked = true;
            state.unlocked_at = Some(now);
        }
    }

    due
}
