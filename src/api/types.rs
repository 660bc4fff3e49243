//! Request/response payloads of the workout backend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate stats returned by `GET /api/workouts/stats/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub level: u32,
    pub total_xp: u32,
    pub total_workouts: u32,
    pub total_exercises: u32,
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    pub level_progress: f64,
    #[serde(default)]
    pub achievements_unlocked: u32,
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown gender: {s} (expected male, female or other)")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub gender: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    Cardio,
    Strength,
    Hiit,
    Mobility,
    Mixed,
}

impl WorkoutCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Hiit => "hiit",
            Self::Mobility => "mobility",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cardio" => Ok(Self::Cardio),
            "strength" => Ok(Self::Strength),
            "hiit" => Ok(Self::Hiit),
            "mobility" => Ok(Self::Mobility),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!("Unknown workout category: {s}")),
        }
    }
}

/// Workout as listed by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workout {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: WorkoutCategory,
    /// Minimum level required
    pub level: u32,
    #[serde(default)]
    pub duration: u32,
    pub exercises_count: u32,
    pub xp_reward: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Body for `POST /api/workouts/`
#[derive(Debug, Clone, Serialize)]
pub struct NewWorkout {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: WorkoutCategory,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub exercises_count: u32,
    pub xp_reward: u32,
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StartSessionRequest {
    pub workout_id: u64,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkoutSession {
    pub id: u64,
    pub user_id: u64,
    pub workout_id: u64,
    pub started_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub xp_earned: u32,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewExercise {
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseProgressUpdate {
    pub completed_sets: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkoutExercise {
    pub id: u64,
    pub session_id: u64,
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub completed_sets: u32,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyProgress {
    pub date: String,
    pub sessions: u32,
    pub completed: u32,
    pub xp_earned: u32,
}

/// Weekly summary from `GET /api/workouts/progress/weekly`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyProgress {
    pub week_start: String,
    pub week_end: String,
    pub total_sessions: u32,
    pub completed_sessions: u32,
    pub total_xp: u32,
    pub current_streak: u32,
    pub level: u32,
    #[serde(default)]
    pub daily_progress: Vec<DailyProgress>,
}
