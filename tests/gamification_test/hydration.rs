//! Store hydration: backend, cache and defaults

use std::time::Duration;

use cirqulofit::api::ApiError;
use cirqulofit::auth::SessionToken;
use cirqulofit::stats::{
    AchievementId, FileStatsCache, HydrationSource, RemoteStatsProvider, StatsCache, StatsStore,
    StorePhase, UserStats,
};
use tempfile::tempdir;

use crate::common::{client_for, unreachable_base_url, FakeBackend, Route, REMOTE_SUMMARY, STATS_PATH};

fn token() -> SessionToken {
    SessionToken::new("test-token").unwrap()
}

/// Cache holding a small local history: 30 XP, 2 workouts
fn seeded_cache(dir: &std::path::Path) -> FileStatsCache {
    let cache = FileStatsCache::in_dir(dir);
    let mut stats = UserStats::default();
    stats.xp = 30;
    stats.total_workouts = 2;
    stats.total_exercises = 3;
    cache.write(&stats.to_snapshot()).unwrap();
    cache
}

#[test]
fn test_no_token_yields_defaults() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json("GET", STATS_PATH, 200, REMOTE_SUMMARY)]);
    let mut store = StatsStore::new(FileStatsCache::in_dir(dir.path()));

    let source = store.hydrate(None, &backend.client());

    assert_eq!(source, HydrationSource::Defaults);
    assert_eq!(backend.hits(STATS_PATH), 0);
    let stats = store.stats();
    assert_eq!(stats.level, 1);
    assert_eq!(stats.xp, 0);
    assert_eq!(stats.total_workouts, 0);
    assert_eq!(stats.level_progress, 0.0);
    assert_eq!(stats.unlocked_count(), 0);
}

#[test]
fn test_remote_summary_is_taken_verbatim() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json("GET", STATS_PATH, 200, REMOTE_SUMMARY)]);
    let mut store = StatsStore::new(FileStatsCache::in_dir(dir.path()));

    let source = store.hydrate(Some(&token()), &backend.client());

    assert_eq!(source, HydrationSource::Remote);
    assert_eq!(store.phase(), StorePhase::Ready);
    let stats = store.stats();
    assert_eq!(stats.level, 3);
    assert_eq!(stats.xp, 250);
    assert_eq!(stats.total_workouts, 12);
    assert_eq!(stats.total_exercises, 40);
    assert_eq!(stats.streak, 2);
    assert_eq!(stats.level_progress, 40.0);
    assert_eq!(stats.xp_to_next_level, 50);

    assert!(stats.is_unlocked(AchievementId::FirstWorkout));
    assert!(stats.is_unlocked(AchievementId::Workout10));
    assert!(!stats.is_unlocked(AchievementId::Streak7));
    assert!(!stats.is_unlocked(AchievementId::Level5));
    assert!(!stats.is_unlocked(AchievementId::Streak30));

    let request = &backend.requests()[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));

    // Mirrored to the cache
    let cached = FileStatsCache::in_dir(dir.path()).read().unwrap();
    assert_eq!(cached.xp, 250);
    assert_eq!(cached.total_workouts, 12);
}

#[test]
fn test_server_error_falls_back_to_cache() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json(
        "GET",
        STATS_PATH,
        500,
        r#"{"detail":"database unavailable"}"#,
    )]);
    let mut store = StatsStore::new(seeded_cache(dir.path()));

    let source = store.hydrate(Some(&token()), &backend.client());

    assert_eq!(source, HydrationSource::Cache);
    assert_eq!(backend.hits(STATS_PATH), 1);
    assert_eq!(store.stats().xp, 30);
    assert_eq!(store.stats().total_workouts, 2);
    // Two cached workouts earn the first achievement on load
    assert!(store.stats().is_unlocked(AchievementId::FirstWorkout));
    assert!(!store.stats().is_unlocked(AchievementId::Workout10));
    let cached = FileStatsCache::in_dir(dir.path()).read().unwrap();
    assert!(cached
        .achievements
        .iter()
        .any(|a| a.id == "first_workout" && a.unlocked && a.unlocked_at.is_some()));
}

#[test]
fn test_server_error_message_uses_detail() {
    let backend = FakeBackend::start(vec![Route::json(
        "GET",
        STATS_PATH,
        503,
        r#"{"detail":"database unavailable"}"#,
    )]);

    let err = backend.client().fetch_stats(&token()).unwrap_err();
    match err {
        ApiError::Status { code, message } => {
            assert_eq!(code, 503);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_timeout_falls_back_to_cache() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![
        Route::json("GET", STATS_PATH, 200, REMOTE_SUMMARY).delayed(Duration::from_secs(3)),
    ]);
    let client = client_for(&backend.base_url, 1);
    let mut store = StatsStore::new(seeded_cache(dir.path()));

    let source = store.hydrate(Some(&token()), &client);

    assert_eq!(source, HydrationSource::Cache);
    assert_eq!(store.stats().xp, 30);
}

#[test]
fn test_unreachable_backend_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let client = client_for(&unreachable_base_url(), 2);
    let mut store = StatsStore::new(FileStatsCache::in_dir(dir.path()));

    assert!(matches!(
        client.fetch_stats(&token()),
        Err(ApiError::Network(_)) | Err(ApiError::Timeout)
    ));
    assert_eq!(
        store.hydrate(Some(&token()), &client),
        HydrationSource::Defaults
    );
    assert_eq!(store.stats(), &UserStats::default());
}

#[test]
fn test_undecodable_body_falls_back() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json("GET", STATS_PATH, 200, r#"{"level":"x"}"#)]);
    let mut store = StatsStore::new(seeded_cache(dir.path()));

    assert!(matches!(
        backend.client().fetch_stats(&token()),
        Err(ApiError::Decode(_))
    ));
    assert_eq!(
        store.hydrate(Some(&token()), &backend.client()),
        HydrationSource::Cache
    );
}

#[test]
fn test_malformed_cache_yields_defaults() {
    let dir = tempdir().unwrap();
    let cache = FileStatsCache::in_dir(dir.path());
    std::fs::write(cache.path(), r#"{"level": 4, "xp": "#).unwrap();
    let backend = FakeBackend::start(vec![]);
    let mut store = StatsStore::new(cache);

    assert_eq!(store.hydrate(None, &backend.client()), HydrationSource::Defaults);
    assert_eq!(store.stats(), &UserStats::default());
}

#[test]
fn test_cache_reload_recomputes_derived_fields() {
    let dir = tempdir().unwrap();
    let cache = FileStatsCache::in_dir(dir.path());
    std::fs::write(
        cache.path(),
        r#"{
            "level": 1,
            "xp": 120,
            "xp_to_next_level": 999,
            "total_workouts": 7,
            "total_exercises": 9,
            "streak": 1,
            "level_progress": 99.0,
            "achievements": [
                {"id": "first_workout", "unlocked": true, "unlocked_at": "2024-03-01T08:00:00Z"},
                {"id": "cardio_master", "unlocked": true}
            ]
        }"#,
    )
    .unwrap();
    let backend = FakeBackend::start(vec![]);
    let mut store = StatsStore::new(cache);

    assert_eq!(store.hydrate(None, &backend.client()), HydrationSource::Cache);
    let stats = store.stats();
    assert_eq!(stats.level, 2);
    assert_eq!(stats.xp_to_next_level, 80);
    // 7 workouts, level 2 spans 5..15
    assert!((stats.level_progress - 20.0).abs() < 1e-9);
    assert_eq!(stats.unlocked_count(), 1);
    let first = stats.achievement(AchievementId::FirstWorkout).unwrap();
    assert_eq!(
        first.unlocked_at.map(|t| t.to_rfc3339()),
        Some("2024-03-01T08:00:00+00:00".to_string())
    );
}

#[test]
fn test_late_result_after_reset_is_dropped() {
    let dir = tempdir().unwrap();
    let backend = FakeBackend::start(vec![Route::json("GET", STATS_PATH, 200, REMOTE_SUMMARY)]);
    let client = backend.client();
    let mut store = StatsStore::new(FileStatsCache::in_dir(dir.path()));

    let ticket = store.begin_hydration();
    let fetched = client.fetch_stats(&token());
    store.reset();

    assert_eq!(store.complete_hydration(ticket, Some(fetched)), None);
    assert_eq!(store.stats(), &UserStats::default());
    assert!(!FileStatsCache::in_dir(dir.path()).path().exists());
}
