//! Gamification state for CirquloFit
//!
//! Tracks level, XP, workout counts, streak and achievements, persisted as a
//! JSON snapshot in the profile directory (`~/.cirqulofit/cirqulofit-stats.json`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │     Backend     │     │   Local cache   │
//! │ /workouts/stats │     │ (last snapshot) │
//! └────────┬────────┘     └────────┬────────┘
//!          │   remote → cache → defaults
//!          └───────────┬───────────┘
//!                      ▼
//!                 StatsStore
//!                      │
//!                      ▼
//!             GamificationEngine ──► StatsCache (write-through)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut store = StatsStore::new(FileStatsCache::in_dir(&data_dir));
//! store.hydrate(token.as_ref(), &client);
//!
//! for event in store.engine_mut().complete_workout() {
//!     println!("{event}");
//! }
//! ```

pub mod achievements;
mod cache;
mod models;
mod repository;
mod store;

pub use achievements::{
    Achievement, AchievementId, GamificationEngine, GamificationEvent, Level, LevelUp,
    UnlockedAchievement, XpRewards, ACHIEVEMENTS, LEVELS, XP_PER_LEVEL,
};
pub use cache::{FileStatsCache, MemoryStatsCache, StatsCache, STATS_ENTRY};
pub use models::{AchievementRecord, AchievementState, StatsSnapshot, UserStats};
pub use repository::{hydrate, load_local, resolve, Hydrated, HydrationSource, RemoteStatsProvider};
pub use store::{HydrationTicket, StatsStore, StorePhase};
