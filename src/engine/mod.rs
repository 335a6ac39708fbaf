//! Game engine.
//!
//! `Solitaire` owns the ten piles, the stock, the held run and the
//! snapshot history, and performs every rule-checked transition:
//! - `hold` / `put`: lift a run and drop it elsewhere
//! - `deal`: one card from the stock onto every pile
//! - `undo`: return to the previous snapshot
//!
//! All operations report illegality as `false` and leave state untouched,
//! except that `put` always clears the held run.

pub mod snapshot;
pub mod solitaire;
mod moves;

pub use snapshot::{History, Snapshot};
pub use solitaire::{Held, PutOutcome, Solitaire};
