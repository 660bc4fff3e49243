//! Workout catalog and tracked sessions

use cirqulofit::api::{ApiError, NewWorkout, WorkoutCategory};
use cirqulofit::auth::SessionToken;
use cirqulofit::stats::{FileStatsCache, StatsCache, StatsStore};
use cirqulofit::workout::{
    find_workout, merge_catalog, session_template, SetOutcome, WorkoutOrigin,
    WorkoutSessionTracker,
};
use tempfile::tempdir;

use crate::common::{FakeBackend, Route};

const WORKOUTS: &str = r#"[
    {"id": 41, "name": "Desk Reset", "description": "Posture break", "category": "mobility",
     "level": 1, "duration": 10, "exercises_count": 4, "xp_reward": 20},
    {"id": 42, "name": "Heavy Day", "category": "strength",
     "level": 6, "duration": 50, "exercises_count": 8, "xp_reward": 90},
    {"id": 43, "name": "Retired", "category": "cardio",
     "level": 1, "duration": 20, "exercises_count": 3, "xp_reward": 10, "is_active": false}
]"#;

#[test]
fn test_catalog_merges_backend_workouts() {
    let backend = FakeBackend::start(vec![Route::json("GET", "/api/workouts", 200, WORKOUTS)]);
    let remote = backend.client().list_workouts(Some(2)).unwrap();
    assert_eq!(remote.len(), 3);
    assert_eq!(backend.requests()[0].url, "/api/workouts?level=2");

    let catalog = merge_catalog(2, &remote);
    let ids: Vec<_> = catalog.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["1-1", "1-2", "2-1", "2-2", "41"]);
    assert_eq!(catalog[4].origin, WorkoutOrigin::Remote);
    assert_eq!(catalog[4].category, WorkoutCategory::Mobility);
}

#[test]
fn test_create_workout_posts_with_token() {
    let backend = FakeBackend::start(vec![Route::json(
        "POST",
        "/api/workouts/",
        200,
        r#"{"id": 77, "name": "Push Day", "category": "strength", "level": 2,
            "duration": 40, "exercises_count": 5, "xp_reward": 60}"#,
    )]);
    let client = backend.client().with_token(SessionToken::new("jwt-9"));
    let request = NewWorkout {
        name: "Push Day".to_string(),
        description: None,
        category: WorkoutCategory::Strength,
        level: 2,
        duration: Some(40),
        exercises_count: 5,
        xp_reward: 60,
    };

    let created = client.create_workout(&request).unwrap();
    assert_eq!(created.id, 77);
    assert!(created.is_active);

    let recorded = &backend.requests()[0];
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.authorization.as_deref(), Some("Bearer jwt-9"));
    let body: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(body["category"], "strength");
    assert_eq!(body["exercises_count"], 5);
    assert!(body.get("description").is_none());

    // Without a token nothing is sent
    let anonymous = backend.client();
    assert!(matches!(
        anonymous.create_workout(&request),
        Err(ApiError::MissingToken)
    ));
    assert_eq!(backend.requests().len(), 1);

    // A created workout joins the catalog once the level allows it
    let catalog = merge_catalog(2, &[created]);
    assert_eq!(catalog.last().and_then(|w| w.remote_id()), Some(77));
}

#[test]
fn test_strength_session_end_to_end() {
    let dir = tempdir().unwrap();
    let mut store = StatsStore::new(FileStatsCache::in_dir(dir.path()));
    let workout = find_workout("2-2").unwrap();
    let plan = session_template(workout.category);
    let total_sets: u32 = plan.iter().map(|e| e.sets).sum();
    let exercises = plan.len() as u32;

    let mut tracker = WorkoutSessionTracker::new(workout.name, plan).unwrap();
    tracker.start(store.engine_mut()).unwrap();

    let mut rests = 0;
    let mut finished = None;
    while tracker.current_exercise().is_some() {
        let step = tracker.complete_set(store.engine_mut()).unwrap();
        match step.outcome {
            SetOutcome::ExerciseDone { .. } => rests += 1,
            SetOutcome::WorkoutDone { duration_minutes } => finished = Some(duration_minutes),
            SetOutcome::SetDone { .. } => {}
        }
    }

    assert_eq!(finished, Some(0));
    assert_eq!(rests, exercises - 1);

    // start + non-final sets + per-exercise bonus and engine XP + workout
    let expected_xp = 10 + (total_sets - exercises) * 5 + exercises * (15 + 10) + 100;
    let stats = store.stats();
    assert_eq!(stats.xp, expected_xp);
    assert_eq!(stats.total_exercises, exercises);
    assert_eq!(stats.total_workouts, 1);
    assert_eq!(stats.level, expected_xp / 100 + 1);

    let cached = store.engine().cache().read().unwrap();
    assert_eq!(cached.xp, expected_xp);
    assert_eq!(cached.total_workouts, 1);
}
