//! Engine operations persisted through the file cache

use cirqulofit::stats::{
    AchievementId, FileStatsCache, GamificationEvent, HydrationSource, StatsCache, StatsStore,
    UserStats,
};
use tempfile::tempdir;

use crate::common::FakeBackend;

fn fresh_store(dir: &std::path::Path) -> StatsStore<FileStatsCache> {
    StatsStore::new(FileStatsCache::in_dir(dir))
}

#[test]
fn test_ten_small_awards_reach_level_two() {
    let dir = tempdir().unwrap();
    let mut store = fresh_store(dir.path());

    for _ in 0..10 {
        store.engine_mut().add_experience(10);
    }

    assert_eq!(store.stats().xp, 100);
    assert_eq!(store.stats().level, 2);
    assert_eq!(store.engine().cache().read().unwrap().xp, 100);
}

#[test]
fn test_workout_milestones() {
    let dir = tempdir().unwrap();
    let mut store = fresh_store(dir.path());

    for _ in 0..5 {
        store.engine_mut().complete_workout();
    }
    assert_eq!(store.stats().total_workouts, 5);
    assert_eq!(store.stats().level, 2);
    assert!(store.stats().is_unlocked(AchievementId::FirstWorkout));
    assert!(!store.stats().is_unlocked(AchievementId::Workout10));

    for _ in 0..4 {
        store.engine_mut().complete_workout();
    }
    assert!(!store.stats().is_unlocked(AchievementId::Workout10));

    let events = store.engine_mut().complete_workout();
    assert!(store.stats().is_unlocked(AchievementId::Workout10));
    assert!(events.iter().any(|e| matches!(
        e,
        GamificationEvent::AchievementUnlocked(a) if a.achievement.id == AchievementId::Workout10
    )));
}

#[test]
fn test_streak_achievements() {
    let dir = tempdir().unwrap();
    let mut store = fresh_store(dir.path());

    for _ in 0..6 {
        store.engine_mut().update_streak();
    }
    assert!(!store.stats().is_unlocked(AchievementId::Streak7));

    store.engine_mut().update_streak();
    assert_eq!(store.stats().streak, 7);
    assert!(store.stats().is_unlocked(AchievementId::Streak7));
    assert!(!store.stats().is_unlocked(AchievementId::Streak30));
}

#[test]
fn test_state_survives_restart() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![]);

    let before = {
        let mut store = fresh_store(dir.path());
        store.engine_mut().complete_workout();
        store.engine_mut().complete_exercise();
        store.engine_mut().add_experience(400);
        store.engine_mut().update_streak();
        store.stats().clone()
    };

    let mut store = fresh_store(dir.path());
    assert_eq!(store.hydrate(None, &backend.client()), HydrationSource::Cache);

    let after = store.stats();
    assert_eq!(after.level, before.level);
    assert_eq!(after.xp, 410);
    assert_eq!(after.total_workouts, 1);
    assert_eq!(after.total_exercises, 1);
    assert_eq!(after.streak, 1);
    assert!(after.is_unlocked(AchievementId::Level5));
    assert_eq!(after.achievements, before.achievements);
}

#[test]
fn test_unlock_time_is_stable() {
    let dir = tempdir().unwrap();
    let mut store = fresh_store(dir.path());

    store.engine_mut().complete_workout();
    let first = store
        .stats()
        .achievement(AchievementId::FirstWorkout)
        .and_then(|a| a.unlocked_at);
    assert!(first.is_some());

    store.engine_mut().complete_workout();
    store.engine_mut().check_achievements();
    let again = store
        .stats()
        .achievement(AchievementId::FirstWorkout)
        .and_then(|a| a.unlocked_at);
    assert_eq!(first, again);
}

#[test]
fn test_reset_removes_cache_file() {
    let dir = tempdir().unwrap();
    let mut store = fresh_store(dir.path());
    store.engine_mut().complete_workout();
    let path = store.engine().cache().path().to_path_buf();
    assert!(path.exists());

    store.reset();

    assert!(!path.exists());
    assert_eq!(store.stats(), &UserStats::default());
    assert!(store.engine().cache().read().is_none());
}
