//! Two-tier stats source: backend first, local cache second, defaults last.

use chrono::Utc;

use super::achievements::check_achievements;
use super::cache::StatsCache;
use super::models::UserStats;
use crate::api::{ApiError, WorkoutStats};
use crate::auth::SessionToken;

/// Remote tier: aggregate stats for an authenticated session
pub trait RemoteStatsProvider {
    fn fetch_stats(&self, token: &SessionToken) -> Result<WorkoutStats, ApiError>;
}

/// Where hydrated stats came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationSource {
    Remote,
    Cache,
    Defaults,
}

impl HydrationSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Remote => "backend",
            Self::Cache => "local cache",
            Self::Defaults => "defaults",
        }
    }
}

/// Stats ready to be installed in the engine
#[derive(Debug, Clone)]
pub struct Hydrated {
    pub stats: UserStats,
    pub source: HydrationSource,
}

/// Cache tier, falling back to level 1 defaults.
///
/// Cached stats are re-evaluated so achievements earned by the cached
/// counters are unlocked, as on the backend path.
pub fn load_local<C: StatsCache + ?Sized>(cache: &C) -> Hydrated {
    match cache.read() {
        Some(snapshot) => {
            tracing::debug!("Hydrating stats from local cache");
            let mut stats = UserStats::from_snapshot(&snapshot);
            check_achievements(&mut stats, Utc::now());
            Hydrated {
                stats,
                source: HydrationSource::Cache,
            }
        }
        None => {
            tracing::debug!("No cached stats, starting from defaults");
            Hydrated {
                stats: UserStats::default(),
                source: HydrationSource::Defaults,
            }
        }
    }
}

/// Pick the winning tier.
///
/// `remote` is None when there is no session token. A remote success replaces
/// everything except unlock times the cache already recorded for achievements
/// that stay unlocked.
pub fn resolve<C: StatsCache + ?Sized>(
    remote: Option<Result<WorkoutStats, ApiError>>,
    cache: &C,
) -> Hydrated {
    match remote {
        None => {
            tracing::debug!("No session token, using local stats");
            load_local(cache)
        }
        Some(Ok(summary)) => {
            tracing::debug!("Hydrating stats from backend");
            let mut stats = UserStats::from_remote(&summary);
            check_achievements(&mut stats, Utc::now());
            if let Some(snapshot) = cache.read() {
                stats.restore_unlock_times(&UserStats::from_snapshot(&snapshot).achievements);
            }
            Hydrated {
                stats,
                source: HydrationSource::Remote,
            }
        }
        Some(Err(e)) => {
            tracing::warn!("Failed to load stats from backend, using local data: {}", e);
            load_local(cache)
        }
    }
}

/// Full hydration: fetch (when a token exists), then resolve
pub fn hydrate<P, C>(token: Option<&SessionToken>, remote: &P, cache: &C) -> Hydrated
where
    P: RemoteStatsProvider + ?Sized,
    C: StatsCache + ?Sized,
{
    resolve(token.map(|t| remote.fetch_stats(t)), cache)
}
