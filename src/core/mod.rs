//! Core value types: cards, actions, RNG, configuration, errors.
//!
//! Everything here is plain data. Rule checks live in `rules`, pile state
//! in `tableau`, and game orchestration in `engine`.

pub mod card;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use card::{build_deck, Card, Rank, Suit, SuitCount, DECK_SIZE, RUN_LENGTH, SEQUENCES_PER_GAME};
pub use rng::{GameRng, GameRngState};
pub use config::{
    SpiderConfig, COMPLETION_BONUS, DEAL_PENALTY, INITIAL_PILE_SIZES, INITIAL_SCORE, PILE_COUNT,
};
pub use action::{Action, ActionRecord, Move};
pub use error::{SpiderError, SpiderResult};
