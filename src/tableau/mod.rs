//! Tableau piles.
//!
//! The tableau is ten `Sequence`s. Each owns its cards and knows how many
//! of them are still face-down; it answers the per-pile legality questions
//! (can this run be lifted, can this card be dropped here, is a sequence
//! complete) that the engine orchestrates.

pub mod sequence;

pub use sequence::{Run, Sequence};
