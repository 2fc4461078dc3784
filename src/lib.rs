//! MindForge - progression and scoring engine
//!
//! MindForge is a cognitive-training puzzle game: 100 missions of 100 levels
//! each, every level a small memory, number or pattern puzzle. This crate owns
//! the player's persistent state and the rules around it.
//!
//! ## Pieces
//!
//! 1. **Domain** (`domain`): missions, progress, settings and levels derived
//!    from their position in a mission.
//!
//! 2. **Store** (`store`): a dumb key-value persistence layer holding the
//!    progress and settings documents (SQLite, JSON files or memory).
//!
//! 3. **Engine** (`progression`): rewards, unlocks and daily streaks. The
//!    only component that mutates player state.
//!
//! Puzzles themselves live outside this crate; they report the seconds a
//! level took and the engine does the rest.

pub mod config;
pub mod domain;
pub mod progression;
pub mod store;

pub use domain::*;
pub use progression::{LevelCompletion, ProgressError, ProgressEvent, ProgressionEngine, Reward};
