use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cirqulofit::api::{Gender, WorkoutCategory};

mod cli;

use cli::context::AppContext;

#[derive(Parser)]
#[command(name = "cirqulofit")]
#[command(about = "CirquloFit - level up from the couch, one workout at a time")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.cirqulofit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP, counters and streak
    Status,

    /// List all achievements and which ones are unlocked
    Achievements,

    /// Add experience points
    Xp {
        /// Amount of XP to add
        amount: u32,
    },

    /// Record a completed workout
    CompleteWorkout,

    /// Record a completed exercise (+10 XP)
    CompleteExercise,

    /// Extend the activity streak by one day
    Streak,

    /// Reset stats to level 1 and clear the local cache
    Reset,

    /// Log in to the CirquloFit backend
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// male, female or other
        #[arg(long, default_value = "other")]
        gender: Gender,
    },

    /// Log out and clear local stats
    Logout,

    /// List workouts available at your level
    Workouts {
        /// Show workouts up to this level instead of yours
        #[arg(long)]
        level: Option<u32>,
    },

    /// Publish a custom workout to the backend
    CreateWorkout {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// cardio, strength, hiit, mobility or mixed
        #[arg(long, default_value = "mixed")]
        category: WorkoutCategory,
        /// Minimum level required
        #[arg(long, default_value_t = 1)]
        level: u32,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Number of exercises
        #[arg(long, default_value_t = 1)]
        exercises: u32,
        /// XP reward for finishing it
        #[arg(long, default_value_t = 50)]
        xp: u32,
    },

    /// Run a workout, completing every set
    Train {
        /// Workout id (e.g. 1-1, or a backend workout id)
        workout_id: String,
    },

    /// Print a shareable weekly progress card
    Share {
        /// Workouts this week (defaults to the backend's weekly progress)
        #[arg(long)]
        sessions: Option<u32>,
    },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Status);
    if let Commands::Init { force } = command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let mut ctx = AppContext::load(cli.config.as_deref())?;

    match command {
        Commands::Login { email, password } => {
            cli::account::login_command(&mut ctx, email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
            gender,
        } => {
            cli::account::register_command(&mut ctx, name, email, password, gender).await?;
        }
        Commands::Logout => {
            cli::account::logout_command(&mut ctx)?;
        }
        Commands::Reset => {
            cli::gamify::reset_command(&mut ctx)?;
        }
        command => {
            let source = ctx.hydrate().await?;
            run_with_stats(&mut ctx, command, source).await?;
        }
    }

    Ok(())
}

/// Commands that need hydrated stats
async fn run_with_stats(
    ctx: &mut AppContext,
    command: Commands,
    source: cirqulofit::stats::HydrationSource,
) -> Result<()> {
    match command {
        Commands::Status => cli::status::status_command(ctx, source),
        Commands::Achievements => cli::gamify::achievements_command(ctx),
        Commands::Xp { amount } => cli::gamify::xp_command(ctx, amount),
        Commands::CompleteWorkout => cli::gamify::complete_workout_command(ctx),
        Commands::CompleteExercise => cli::gamify::complete_exercise_command(ctx),
        Commands::Streak => cli::gamify::streak_command(ctx),
        Commands::Workouts { level } => cli::workouts::workouts_command(ctx, level).await,
        Commands::CreateWorkout {
            name,
            description,
            category,
            level,
            duration,
            exercises,
            xp,
        } => {
            let draft = cli::workouts::WorkoutDraft {
                name,
                description,
                category,
                level,
                duration,
                exercises,
                xp,
            };
            cli::workouts::create_workout_command(ctx, draft).await
        }
        Commands::Train { workout_id } => cli::train::train_command(ctx, &workout_id).await,
        Commands::Share { sessions } => cli::share::share_command(ctx, sessions).await,
        Commands::Init { .. }
        | Commands::Login { .. }
        | Commands::Register { .. }
        | Commands::Logout
        | Commands::Reset => Ok(()),
    }
}
