//! Engine commands: XP, workouts, exercises, streak, reset, achievements

use anyhow::Result;

use cirqulofit::stats::{Achievement, AchievementId};

use super::context::{print_events, AppContext};

pub fn xp_command(ctx: &mut AppContext, amount: u32) -> Result<()> {
    let events = ctx.engine().add_experience(amount);
    print_events(&events);
    print_level_line(ctx);
    Ok(())
}

pub fn complete_workout_command(ctx: &mut AppContext) -> Result<()> {
    let events = ctx.engine().complete_workout();
    println!("Workout #{} recorded.", ctx.store.stats().total_workouts);
    print_events(&events);
    Ok(())
}

pub fn complete_exercise_command(ctx: &mut AppContext) -> Result<()> {
    let events = ctx.engine().complete_exercise();
    print_events(&events);
    print_level_line(ctx);
    Ok(())
}

pub fn streak_command(ctx: &mut AppContext) -> Result<()> {
    let events = ctx.engine().update_streak();
    print_events(&events);
    Ok(())
}

pub fn reset_command(ctx: &mut AppContext) -> Result<()> {
    ctx.store.reset();
    println!("Stats reset to level 1.");
    Ok(())
}

pub fn achievements_command(ctx: &AppContext) -> Result<()> {
    let stats = ctx.store.stats();
    println!(
        "Achievements ({}/{}):\n",
        stats.unlocked_count(),
        Achievement::total_count()
    );

    for id in AchievementId::all() {
        let achievement = Achievement::get(*id);
        let state = stats.achievement(*id);
        let marker = if stats.is_unlocked(*id) { "✓" } else { " " };
        println!(
            "  [{}] {} {} - {}",
            marker, achievement.icon, achievement.name, achievement.description
        );
        if let Some(at) = state.and_then(|s| s.unlocked_at) {
            println!("      unlocked {}", at.format("%Y-%m-%d %H:%M"));
        }
    }

    Ok(())
}

fn print_level_line(ctx: &AppContext) {
    let stats = ctx.store.stats();
    println!(
        "Level {} ({}) - {} XP, {} to next level",
        stats.level,
        stats.level_info().name,
        stats.xp,
        stats.xp_to_next_level
    );
}
