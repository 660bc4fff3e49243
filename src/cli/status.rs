//! Status command implementation

use anyhow::Result;

use cirqulofit::auth::SessionStatus;
use cirqulofit::stats::{Achievement, HydrationSource};

use super::context::{progress_bar, AppContext};

/// Show level, XP, counters and where the stats came from
pub fn status_command(ctx: &AppContext, source: HydrationSource) -> Result<()> {
    let stats = ctx.store.stats();
    let level = stats.level_info();

    match &ctx.session {
        SessionStatus::Verified { user, .. } => println!("Logged in as {} <{}>", user.name, user.email),
        SessionStatus::Unverified { .. } => println!("Logged in (offline)"),
        SessionStatus::Anonymous => println!("Not logged in"),
    }
    println!("Stats from {}\n", source.label());

    println!("  {} Level {} - {}", level.emoji, stats.level, level.name);
    println!("    {}", level.description);
    match stats.next_level_info() {
        Some(next) => println!(
            "    {} towards {} {}",
            progress_bar(stats.level_progress, 20),
            next.emoji,
            next.name
        ),
        None => println!("    {} max level", progress_bar(100.0, 20)),
    }
    println!();
    println!("  XP:            {} ({} to next level)", stats.xp, stats.xp_to_next_level);
    println!("  Workouts:      {}", stats.total_workouts);
    println!("  Exercises:     {}", stats.total_exercises);
    println!("  Streak:        {} days", stats.streak);
    println!(
        "  Achievements:  {}/{}",
        stats.unlocked_count(),
        Achievement::total_count()
    );

    Ok(())
}
