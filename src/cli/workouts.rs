//! Workout listing

use anyhow::{bail, Result};

use cirqulofit::api::{NewWorkout, Workout, WorkoutCategory};
use cirqulofit::workout::{merge_catalog, CatalogWorkout, WorkoutOrigin};

use super::context::{blocking, AppContext};

/// Backend workouts, empty when logged out or unreachable
pub async fn fetch_remote_workouts(ctx: &AppContext) -> Vec<Workout> {
    if !ctx.is_logged_in() {
        return Vec::new();
    }

    let client = ctx.client.clone();
    match blocking(move || client.list_workouts(None)).await {
        Ok(Ok(workouts)) => workouts,
        Ok(Err(e)) => {
            tracing::warn!("Failed to load workouts from backend: {}", e);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("{:#}", e);
            Vec::new()
        }
    }
}

/// List workouts unlocked at `level` (default: the user's level)
pub async fn workouts_command(ctx: &AppContext, level: Option<u32>) -> Result<()> {
    let level = level.unwrap_or(ctx.store.stats().level);
    let remote = fetch_remote_workouts(ctx).await;
    let catalog = merge_catalog(level, &remote);

    println!("Workouts up to level {} ({}):\n", level, catalog.len());
    for workout in &catalog {
        print_workout(workout);
    }
    println!("\nStart one with: cirqulofit train <id>");

    Ok(())
}

/// Fields of `create-workout`
pub struct WorkoutDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: WorkoutCategory,
    pub level: u32,
    pub duration: Option<u32>,
    pub exercises: u32,
    pub xp: u32,
}

impl WorkoutDraft {
    /// Request body; the name must not be blank and there must be an exercise
    pub fn into_request(self) -> Result<NewWorkout> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("Workout name must not be empty");
        }
        if self.exercises == 0 {
            bail!("A workout needs at least one exercise");
        }

        Ok(NewWorkout {
            name: name.to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            category: self.category,
            level: self.level.max(1),
            duration: self.duration,
            exercises_count: self.exercises,
            xp_reward: self.xp,
        })
    }
}

/// Publish a custom workout to the backend
pub async fn create_workout_command(ctx: &AppContext, draft: WorkoutDraft) -> Result<()> {
    if !ctx.is_logged_in() {
        bail!("Log in first: cirqulofit login --email <email> --password <password>");
    }

    let request = draft.into_request()?;
    let client = ctx.client.clone();
    let created = blocking(move || client.create_workout(&request)).await??;

    tracing::info!("Created workout {} ({})", created.name, created.id);
    println!("Workout created:\n");
    print_workout(&CatalogWorkout::from(&created));
    println!("\nStart it with: cirqulofit train {}", created.id);
    Ok(())
}

fn print_workout(workout: &CatalogWorkout) {
    let origin = match workout.origin {
        WorkoutOrigin::BuiltIn => "",
        WorkoutOrigin::Remote => " [remote]",
    };
    println!(
        "  {:>5}  {} ({}, lvl {}){}",
        workout.id, workout.name, workout.category, workout.level, origin
    );
    println!(
        "         {} exercises, {} min, +{} XP - {}",
        workout.exercises, workout.duration, workout.xp, workout.description
    );
}
