//! Workout catalog and session tracking

mod catalog;
mod tracker;

pub use catalog::{
    available_workouts, find_workout, merge_catalog, session_template, workouts_for_level,
    CatalogWorkout, WorkoutData, WorkoutOrigin, EVOLUTIONARY_WORKOUTS,
};
pub use tracker::{
    ExercisePlan, SessionError, SetOutcome, Step, WorkoutSessionTracker, REST_BETWEEN_EXERCISES,
};
