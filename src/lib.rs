//! # spider-solitaire
//!
//! Rule engine for Spider Solitaire: ten tableau piles, a stock dealt a row
//! at a time, run lifting and placement, sequence completion, scoring and
//! snapshot-based undo.
//!
//! ## Design Principles
//!
//! 1. **Boolean outcomes**: Game operations never error. An illegal hold,
//!    put, deal or undo returns `false` and leaves state unchanged (a `put`
//!    always clears the held run).
//!
//! 2. **Explicit ownership**: Lifting a run detaches it from its pile and
//!    dropping it appends it to another. The held run never aliases a pile.
//!
//! 3. **Cheap snapshots**: Piles, stock and history use `im-rs` persistent
//!    vectors, so every undo point shares structure with its neighbours.
//!
//! 4. **Deterministic deals**: A seed fully determines the deal, so a game
//!    replays from its seed and action journal.
//!
//! ## Modules
//!
//! - `core`: Cards, actions, RNG, configuration, errors
//! - `rules`: Run detection, placement rule, game status
//! - `tableau`: A single pile (`Sequence`)
//! - `engine`: The game state machine, snapshots and undo (`Solitaire`)

pub mod core;
pub mod rules;
pub mod tableau;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Card, GameRng, GameRngState, Move, Rank, SpiderConfig, SpiderError,
    SpiderResult, Suit, SuitCount,
};

pub use crate::rules::GameStatus;

pub use crate::tableau::{Run, Sequence};

pub use crate::engine::{Held, History, PutOutcome, Snapshot, Solitaire};
