//! Non-interactive workout run
//!
//! Completes every set of the chosen workout in order, printing XP events as
//! they happen. When the workout comes from the backend and the user is
//! logged in, the run is mirrored as a backend session (best effort).

use anyhow::{bail, Result};

use cirqulofit::api::{ApiClient, NewExercise};
use cirqulofit::workout::{
    find_workout, session_template, CatalogWorkout, ExercisePlan, SetOutcome,
    WorkoutSessionTracker,
};

use super::context::{print_events, AppContext};
use super::workouts::fetch_remote_workouts;

pub async fn train_command(ctx: &mut AppContext, workout_id: &str) -> Result<()> {
    let workout = match find_workout(workout_id) {
        Some(builtin) => CatalogWorkout::from(builtin),
        None => {
            let remote = fetch_remote_workouts(ctx).await;
            match remote.iter().find(|w| w.id.to_string() == workout_id) {
                Some(w) => CatalogWorkout::from(w),
                None => bail!("Unknown workout: {}. See `cirqulofit workouts`.", workout_id),
            }
        }
    };

    let level = ctx.store.stats().level;
    if workout.level > level {
        bail!(
            "{} needs level {} (you are level {})",
            workout.name,
            workout.level,
            level
        );
    }

    let backend = match (workout.remote_id(), ctx.is_logged_in()) {
        (Some(id), true) => Some((ctx.client.clone(), id)),
        _ => None,
    };

    tokio::task::block_in_place(|| run_workout(ctx, &workout, backend))
}

fn run_workout(
    ctx: &mut AppContext,
    workout: &CatalogWorkout,
    backend: Option<(ApiClient, u64)>,
) -> Result<()> {
    let mut tracker =
        WorkoutSessionTracker::new(workout.name.clone(), session_template(workout.category))?;
    let mut mirror = backend.and_then(|(client, workout_id)| RemoteMirror::start(client, workout_id));
    if let Some(mirror) = &mirror {
        tracker.attach_remote_session(mirror.session_id);
    }

    println!("{} - {} exercises\n", tracker.name(), tracker.exercises().len());
    print_events(&tracker.start(ctx.engine())?);

    loop {
        let Some(exercise) = tracker.current_exercise().cloned() else {
            break;
        };
        let set = tracker.current_set();
        if set == 1 {
            println!("\n▶ {} ({} x {})", exercise.name, exercise.sets, exercise.reps);
            if let Some(mirror) = mirror.as_mut() {
                mirror.add_exercise(&exercise);
            }
        }

        let step = tracker.complete_set(ctx.engine())?;
        if let Some(mirror) = &mirror {
            mirror.progress(set);
        }
        match step.outcome {
            SetOutcome::SetDone { set, of, .. } => println!("  set {}/{} done", set, of),
            SetOutcome::ExerciseDone { rest, .. } => {
                println!("  exercise done, rest {}s", rest.as_secs())
            }
            SetOutcome::WorkoutDone { duration_minutes } => {
                println!("\n🏁 Workout complete! Duration: {}min", duration_minutes)
            }
        }
        print_events(&step.events);
    }

    if let Some(mirror) = &mirror {
        mirror.complete();
    }

    let stats = ctx.store.stats();
    println!(
        "\nLevel {} {} - {} XP, {} workouts",
        stats.level,
        stats.level_info().emoji,
        stats.xp,
        stats.total_workouts
    );
    Ok(())
}

/// Backend session mirroring one run; failures are logged and ignored
struct RemoteMirror {
    client: ApiClient,
    session_id: u64,
    exercise_id: Option<u64>,
}

impl RemoteMirror {
    fn start(client: ApiClient, workout_id: u64) -> Option<Self> {
        match client.start_session(workout_id) {
            Ok(session) => Some(Self {
                client,
                session_id: session.id,
                exercise_id: None,
            }),
            Err(e) => {
                tracing::warn!("Could not start backend session, training offline: {}", e);
                None
            }
        }
    }

    fn add_exercise(&mut self, plan: &ExercisePlan) {
        let body = NewExercise {
            exercise_name: plan.name.clone(),
            sets: plan.sets,
            reps: plan.reps,
            weight: plan.weight,
        };
        self.exercise_id = match self.client.add_exercise(self.session_id, &body) {
            Ok(exercise) => Some(exercise.id),
            Err(e) => {
                tracing::warn!("Failed to register exercise {}: {}", plan.name, e);
                None
            }
        };
    }

    fn progress(&self, completed_sets: u32) {
        let Some(exercise_id) = self.exercise_id else {
            return;
        };
        if let Err(e) = self.client.update_exercise_progress(exercise_id, completed_sets) {
            tracing::warn!("Failed to update exercise progress: {}", e);
        }
    }

    fn complete(&self) {
        if let Err(e) = self.client.complete_session(self.session_id) {
            tracing::warn!("Failed to complete backend session: {}", e);
        }
    }
}
