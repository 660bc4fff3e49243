//! CirquloFit - gamified fitness tracking
//!
//! Client core for the CirquloFit backend: a themed level table, an
//! achievement catalog and a gamification engine that turns workouts into XP.
//!
//! ## State sources
//!
//! Stats are hydrated once per session from, in order:
//!
//! 1. **Backend**: `/api/workouts/stats/summary` when a session token exists.
//! 2. **Local cache**: the last snapshot written by the engine.
//! 3. **Defaults**: level 1, nothing unlocked.
//!
//! Every engine operation writes the new snapshot back to the cache.

pub mod api;
pub mod auth;
pub mod config;
pub mod share;
pub mod stats;
pub mod storage;
pub mod workout;
