//! Workout, session and progress endpoints.

use chrono::Utc;

use super::{
    ApiClient, ApiError, ExerciseProgressUpdate, NewExercise, NewWorkout, StartSessionRequest,
    WeeklyProgress, Workout, WorkoutExercise, WorkoutSession, WorkoutStats,
};
use crate::auth::SessionToken;
use crate::stats::RemoteStatsProvider;

impl ApiClient {
    /// Workouts, optionally filtered by minimum level
    pub fn list_workouts(&self, level: Option<u32>) -> Result<Vec<Workout>, ApiError> {
        let path = match level {
            Some(level) => format!("/api/workouts?level={level}"),
            None => "/api/workouts".to_string(),
        };
        self.get(&path)
    }

    /// Publish a custom workout; needs a session token
    pub fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, ApiError> {
        self.require_token()?;
        self.send("POST", "/api/workouts/", workout)
    }

    pub fn start_session(&self, workout_id: u64) -> Result<WorkoutSession, ApiError> {
        let body = StartSessionRequest {
            workout_id,
            started_at: Utc::now(),
        };
        self.send("POST", "/api/workouts/sessions/", &body)
    }

    pub fn complete_session(&self, session_id: u64) -> Result<WorkoutSession, ApiError> {
        self.send_empty(
            "PATCH",
            &format!("/api/workouts/sessions/{session_id}/complete"),
        )
    }

    pub fn add_exercise(
        &self,
        session_id: u64,
        exercise: &NewExercise,
    ) -> Result<WorkoutExercise, ApiError> {
        self.send(
            "POST",
            &format!("/api/workouts/sessions/{session_id}/exercises"),
            exercise,
        )
    }

    pub fn update_exercise_progress(
        &self,
        exercise_id: u64,
        completed_sets: u32,
    ) -> Result<WorkoutExercise, ApiError> {
        self.send(
            "PATCH",
            &format!("/api/workouts/sessions/exercises/{exercise_id}/progress"),
            &ExerciseProgressUpdate { completed_sets },
        )
    }

    pub fn weekly_progress(&self) -> Result<WeeklyProgress, ApiError> {
        self.get("/api/workouts/progress/weekly")
    }
}

impl RemoteStatsProvider for ApiClient {
    fn fetch_stats(&self, token: &SessionToken) -> Result<WorkoutStats, ApiError> {
        self.get_as("/api/workouts/stats/summary", Some(token))
    }
}
