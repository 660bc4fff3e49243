//! One run of a workout: exercises, sets, rest and XP
//!
//! The tracker walks the exercise list set by set. Every step awards XP
//! through the [`GamificationEngine`] so the stats cache stays in sync:
//!
//! | step               | XP                                   |
//! |--------------------|--------------------------------------|
//! | start              | 10                                   |
//! | set (not the last) | 5                                    |
//! | last set           | 15 + `complete_exercise` (10)        |
//! | last exercise      | `complete_workout` + 100             |

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::stats::{GamificationEngine, GamificationEvent, StatsCache, XpRewards};

/// Rest between two exercises
pub const REST_BETWEEN_EXERCISES: Duration = Duration::from_secs(90);

/// Planned exercise within a session
#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePlan {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Kilograms, 0 for bodyweight
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Workout has no exercises")]
    NoExercises,

    #[error("Workout already started")]
    AlreadyStarted,

    #[error("Workout not started yet")]
    NotStarted,

    #[error("Workout already finished")]
    Finished,
}

/// What a completed set led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// A set of the current exercise is done, more remain
    SetDone { exercise: usize, set: u32, of: u32 },
    /// The exercise is done; rest before the next one
    ExerciseDone { exercise: usize, rest: Duration },
    /// The last exercise is done
    WorkoutDone { duration_minutes: u32 },
}

/// Result of one step, with the engine events it produced
#[derive(Debug, Clone)]
pub struct Step<T> {
    pub outcome: T,
    pub events: Vec<GamificationEvent>,
}

#[derive(Debug, Clone)]
pub struct WorkoutSessionTracker {
    name: String,
    exercises: Vec<ExercisePlan>,
    current_exercise: usize,
    current_set: u32,
    started_at: Option<DateTime<Utc>>,
    finished: bool,
    remote_session_id: Option<u64>,
}

impl WorkoutSessionTracker {
    pub fn new(name: impl Into<String>, exercises: Vec<ExercisePlan>) -> Result<Self, SessionError> {
        if exercises.is_empty() {
            return Err(SessionError::NoExercises);
        }
        Ok(Self {
            name: name.into(),
            exercises,
            current_exercise: 0,
            current_set: 1,
            started_at: None,
            finished: false,
            remote_session_id: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exercises(&self) -> &[ExercisePlan] {
        &self.exercises
    }

    /// Exercise in progress (None once finished)
    pub fn current_exercise(&self) -> Option<&ExercisePlan> {
        if self.finished {
            None
        } else {
            self.exercises.get(self.current_exercise)
        }
    }

    /// Set in progress, 1-based
    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn completed_exercises(&self) -> usize {
        self.current_exercise
    }

    /// Fraction of exercises done, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.current_exercise as f64 / self.exercises.len() as f64
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some() && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Backend session mirrored by this run, if any
    pub fn remote_session_id(&self) -> Option<u64> {
        self.remote_session_id
    }

    pub fn attach_remote_session(&mut self, id: u64) {
        self.remote_session_id = Some(id);
    }

    /// Whole minutes since start
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        self.started_at
            .map(|start| u32::try_from((now - start).num_minutes().max(0)).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }

    pub fn start<C: StatsCache>(
        &mut self,
        engine: &mut GamificationEngine<C>,
    ) -> Result<Vec<GamificationEvent>, SessionError> {
        self.start_at(engine, Utc::now())
    }

    pub fn start_at<C: StatsCache>(
        &mut self,
        engine: &mut GamificationEngine<C>,
        now: DateTime<Utc>,
    ) -> Result<Vec<GamificationEvent>, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if self.started_at.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        self.started_at = Some(now);
        tracing::debug!("Started workout {}", self.name);
        Ok(engine.award(XpRewards::WORKOUT_STARTED, "workout started"))
    }

    pub fn complete_set<C: StatsCache>(
        &mut self,
        engine: &mut GamificationEngine<C>,
    ) -> Result<Step<SetOutcome>, SessionError> {
        self.complete_set_at(engine, Utc::now())
    }

    pub fn complete_set_at<C: StatsCache>(
        &mut self,
        engine: &mut GamificationEngine<C>,
        now: DateTime<Utc>,
    ) -> Result<Step<SetOutcome>, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if self.started_at.is_none() {
            return Err(SessionError::NotStarted);
        }

        let exercise = self.current_exercise;
        let target = self.exercises[exercise].sets.max(1);

        if self.current_set < target {
            let set = self.current_set;
            self.current_set += 1;
            return Ok(Step {
                outcome: SetOutcome::SetDone {
                    exercise,
                    set,
                    of: target,
                },
                events: engine.award(XpRewards::SET_DONE, "set completed"),
            });
        }

        let mut events = engine.complete_exercise();
        events.extend(engine.award(XpRewards::EXERCISE_DONE, "exercise bonus"));
        self.current_exercise += 1;
        self.current_set = 1;

        if self.current_exercise < self.exercises.len() {
            return Ok(Step {
                outcome: SetOutcome::ExerciseDone {
                    exercise,
                    rest: REST_BETWEEN_EXERCISES,
                },
                events,
            });
        }

        self.finished = true;
        let duration_minutes = self.elapsed_minutes(now);
        events.extend(engine.complete_workout());
        events.extend(engine.award(XpRewards::WORKOUT_DONE, "workout completed"));
        tracing::info!("Finished workout {} in {} min", self.name, duration_minutes);

        Ok(Step {
            outcome: SetOutcome::WorkoutDone { duration_minutes },
            events,
        })
    }
}
