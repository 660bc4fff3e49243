//! Login, registration and logout flows
//!
//! The token lives in the profile directory; logging out also tears down the
//! stats store so the next user starts from defaults.

mod token;

pub use token::{SessionToken, TokenStore};

use anyhow::{Context, Result};

use crate::api::{ApiClient, ApiError, Gender, User};
use crate::stats::{StatsCache, StatsStore};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoggedIn {
    pub user: User,
    pub token: SessionToken,
}

/// Session state found at startup
#[derive(Debug, Clone)]
pub enum SessionStatus {
    /// No token stored
    Anonymous,
    /// Token accepted by the backend
    Verified { token: SessionToken, user: User },
    /// Token kept, backend unreachable
    Unverified { token: SessionToken },
}

impl SessionStatus {
    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Self::Anonymous => None,
            Self::Verified { token, .. } | Self::Unverified { token } => Some(token),
        }
    }
}

/// Log in, store the token and fetch the user
pub fn login(
    client: &ApiClient,
    tokens: &TokenStore,
    email: &str,
    password: &str,
) -> Result<LoggedIn> {
    let response = client
        .login(email, password)
        .with_context(|| format!("Login failed for {email}"))?;
    let token = SessionToken::new(response.access_token)
        .context("Backend returned an empty access token")?;
    tokens.save(&token).context("Failed to store session token")?;

    let user = client
        .clone()
        .with_token(Some(token.clone()))
        .current_user()
        .context("Failed to load user after login")?;

    tracing::info!("Logged in as {}", user.email);
    Ok(LoggedIn { user, token })
}

/// Create an account, then log in with it
pub fn register(
    client: &ApiClient,
    tokens: &TokenStore,
    name: &str,
    email: &str,
    password: &str,
    gender: Gender,
) -> Result<LoggedIn> {
    client
        .register(name, email, password, gender)
        .with_context(|| format!("Registration failed for {email}"))?;
    login(client, tokens, email, password)
}

/// Check the stored token against the backend.
///
/// A rejected token (401) is removed. Other failures keep it, so an offline
/// start still counts as logged in.
pub fn verify_session(client: &ApiClient, tokens: &TokenStore) -> SessionStatus {
    let Some(token) = tokens.load() else {
        return SessionStatus::Anonymous;
    };

    match client.clone().with_token(Some(token.clone())).current_user() {
        Ok(user) => SessionStatus::Verified { token, user },
        Err(ApiError::Unauthorized(msg)) => {
            tracing::info!("Stored session rejected ({}), removing token", msg);
            if let Err(e) = tokens.clear() {
                tracing::warn!("Failed to remove session token: {:#}", e);
            }
            SessionStatus::Anonymous
        }
        Err(e) => {
            tracing::warn!("Could not verify session: {}", e);
            SessionStatus::Unverified { token }
        }
    }
}

/// Drop the token and reset the stats store
pub fn logout<C: StatsCache>(tokens: &TokenStore, store: &mut StatsStore<C>) -> Result<()> {
    store.reset();
    tokens.clear().context("Failed to remove session token")?;
    tracing::info!("Logged out");
    Ok(())
}
