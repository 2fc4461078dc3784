//! Progression and scoring: rewards, unlocks and daily streaks
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = ProgressionEngine::new(SqliteStore::open(&path)?);
//!
//! // A puzzle reported its elapsed time
//! let done = engine.complete_level(1, 1, 10.0)?;
//! assert_eq!(done.reward.xp, 102);
//!
//! let progress = engine.progress();
//! ```

mod engine;
mod events;
mod rewards;
mod streaks;

pub use engine::ProgressionEngine;
pub use events::{LevelCompletion, ProgressEvent};
pub use rewards::Reward;
pub use streaks::{Clock, FixedClock, LocalClock, StreakChange, next_streak};

use crate::store::StoreError;

/// Error type for engine operations
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Unknown mission: {0}")]
    UnknownMission(u32),

    #[error("Level {level} is outside mission {mission_id} (levels 1..={total})")]
    InvalidLevel {
        mission_id: u32,
        level: u32,
        total: u32,
    },

    #[error("Time spent must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
