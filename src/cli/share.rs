//! Share card command

use anyhow::Result;
use chrono::Local;

use cirqulofit::share::{ShareCard, WeeklySummary};

use super::context::{blocking, AppContext};

/// Print the share card; weekly numbers come from `--sessions`, the backend,
/// or zero
pub async fn share_command(ctx: &AppContext, sessions: Option<u32>) -> Result<()> {
    let streak = ctx.store.stats().streak;
    let week = match sessions {
        Some(sessions) => WeeklySummary::new(sessions, streak),
        None => fetch_week(ctx)
            .await
            .unwrap_or_else(|| WeeklySummary::new(0, streak)),
    };

    let card = ShareCard::new(ctx.store.stats(), week, Local::now().date_naive());
    println!("{}\n", card.render());
    println!("{}", card.text());
    println!("\nSuggested image name: {}", card.file_name());
    Ok(())
}

async fn fetch_week(ctx: &AppContext) -> Option<WeeklySummary> {
    if !ctx.is_logged_in() {
        return None;
    }
    let client = ctx.client.clone();
    match blocking(move || client.weekly_progress()).await {
        Ok(Ok(progress)) => Some(WeeklySummary::from_remote(&progress)),
        Ok(Err(e)) => {
            tracing::warn!("Failed to load weekly progress: {}", e);
            None
        }
        Err(e) => {
            tracing::warn!("{:#}", e);
            None
        }
    }
}
