//! Player progress and ranking store for Treasure Hunt.
//!
//! [`ProgressStore`] is the single source of truth for the logged-in
//! player, their game progress and the global leaderboard. It owns every
//! persistence side effect: each mutating action writes a versioned
//! snapshot through a [`KeyValueStorage`] backend before returning.
//! Storage failures are logged and swallowed so the in-memory state stays
//! authoritative.

pub mod config;
pub mod envelope;
pub mod error;
pub mod player;
pub mod progress;
pub mod ranking;
pub mod settings;
pub mod storage;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use player::{Player, PlayerPatch};
pub use progress::{GameProgress, ProgressSnapshot};
pub use ranking::{RankingEntry, Rankings};
pub use settings::Settings;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::ProgressStore;
