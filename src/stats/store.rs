//! Stats store lifecycle
//!
//! The store is built once at startup and handed to every consumer. It moves
//! `Constructed -> Hydrating -> Ready`; `reset` tears it back down to
//! `Constructed` for the next session.
//!
//! Hydration can be split in two so the remote fetch runs elsewhere (e.g. on
//! a blocking worker). The ticket from [`StatsStore::begin_hydration`] goes
//! stale on reset or on a newer hydration, and a stale result is dropped.

use super::achievements::GamificationEngine;
use super::cache::StatsCache;
use super::models::UserStats;
use super::repository::{self, HydrationSource, RemoteStatsProvider};
use crate::api::{ApiError, WorkoutStats};
use crate::auth::SessionToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Constructed,
    Hydrating,
    Ready,
}

/// Proof of a pending hydration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct HydrationTicket {
    generation: u64,
}

pub struct StatsStore<C: StatsCache> {
    engine: GamificationEngine<C>,
    phase: StorePhase,
    generation: u64,
    source: Option<HydrationSource>,
}

impl<C: StatsCache> StatsStore<C> {
    /// Store holding level 1 defaults until hydrated
    pub fn new(cache: C) -> Self {
        Self {
            engine: GamificationEngine::new(cache),
            phase: StorePhase::Constructed,
            generation: 0,
            source: None,
        }
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == StorePhase::Ready
    }

    /// Tier the current stats were hydrated from
    pub fn source(&self) -> Option<HydrationSource> {
        self.source
    }

    pub fn stats(&self) -> &UserStats {
        self.engine.stats()
    }

    pub fn engine(&self) -> &GamificationEngine<C> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GamificationEngine<C> {
        &mut self.engine
    }

    /// Enter `Hydrating`; any earlier ticket goes stale
    pub fn begin_hydration(&mut self) -> HydrationTicket {
        self.generation += 1;
        self.phase = StorePhase::Hydrating;
        HydrationTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result (None = no session token).
    ///
    /// Returns None, changing nothing, when the ticket is stale.
    pub fn complete_hydration(
        &mut self,
        ticket: HydrationTicket,
        remote: Option<Result<WorkoutStats, ApiError>>,
    ) -> Option<HydrationSource> {
        if ticket.generation != self.generation || self.phase != StorePhase::Hydrating {
            tracing::debug!("Discarding stale hydration result");
            return None;
        }

        let hydrated = repository::resolve(remote, self.engine.cache());
        self.engine.replace_stats(hydrated.stats);
        self.phase = StorePhase::Ready;
        self.source = Some(hydrated.source);
        tracing::debug!("Stats hydrated from {}", hydrated.source.label());
        Some(hydrated.source)
    }

    /// Hydrate in one step
    pub fn hydrate<P: RemoteStatsProvider + ?Sized>(
        &mut self,
        token: Option<&SessionToken>,
        remote: &P,
    ) -> HydrationSource {
        let ticket = self.begin_hydration();
        let fetched = token.map(|t| remote.fetch_stats(t));
        self.complete_hydration(ticket, fetched)
            .unwrap_or(HydrationSource::Defaults)
    }

    /// Tear down: defaults, cache entry removed, pending hydration dropped
    pub fn reset(&mut self) {
        self.generation += 1;
        self.engine.reset_stats();
        self.phase = StorePhase::Constructed;
        self.source = None;
    }
}
