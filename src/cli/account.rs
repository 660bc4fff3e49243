//! Login, registration and logout commands

use anyhow::Result;

use cirqulofit::api::Gender;
use cirqulofit::auth;

use super::context::{blocking, AppContext};

pub async fn login_command(ctx: &mut AppContext, email: String, password: String) -> Result<()> {
    let client = ctx.client.clone();
    let tokens = ctx.tokens.clone();
    let logged_in = blocking(move || auth::login(&client, &tokens, &email, &password)).await??;

    println!("Welcome back, {}!", logged_in.user.name);

    let source = ctx.hydrate().await?;
    let stats = ctx.store.stats();
    println!(
        "Level {} {} with {} XP (from {})",
        stats.level,
        stats.level_info().emoji,
        stats.xp,
        source.label()
    );
    Ok(())
}

pub async fn register_command(
    ctx: &mut AppContext,
    name: String,
    email: String,
    password: String,
    gender: Gender,
) -> Result<()> {
    let client = ctx.client.clone();
    let tokens = ctx.tokens.clone();
    let logged_in = blocking(move || {
        auth::register(&client, &tokens, &name, &email, &password, gender)
    })
    .await??;

    println!("Account created. Welcome, {}! 🦠", logged_in.user.name);
    ctx.hydrate().await?;
    Ok(())
}

pub fn logout_command(ctx: &mut AppContext) -> Result<()> {
    auth::logout(&ctx.tokens, &mut ctx.store)?;
    println!("Logged out. Local stats cleared.");
    Ok(())
}
