//! Player actions and the journal records that log them.
//!
//! Every engine operation has an `Action` form so that a game can be
//! replayed from its seed and journal:
//! - `Hold` lifts a run from a pile
//! - `Put` drops the held run
//! - `Deal` deals one row from the stock
//! - `Undo` restores the previous snapshot
//! - `Restart` deals a new game from the same RNG stream

use serde::{Deserialize, Serialize};

/// A single engine operation.
///
/// ```
/// use spider_solitaire::core::Action;
///
/// let lift = Action::Hold { pile: 3, index: 4 };
/// let drop = Action::Put { dest: 7, src: 3 };
/// assert_ne!(lift, drop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Lift the run starting at `index` from `pile`.
    Hold { pile: usize, index: usize },
    /// Drop the held run on `dest`; `src` names the pile it was lifted from.
    Put { dest: usize, src: usize },
    /// Deal one card from the stock onto every pile.
    Deal,
    /// Revert to the previous snapshot.
    Undo,
    /// Discard the game and deal the next one from the RNG stream.
    Restart,
}

/// A complete pile-to-pile move: lift from `from` at `index`, drop on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub index: usize,
    pub to: usize,
}

impl Move {
    #[must_use]
    pub const fn new(from: usize, index: usize, to: usize) -> Self {
        Self { from, index, to }
    }
}

/// A journaled action with its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action dispatched.
    pub action: Action,

    /// Boolean result the operation returned.
    pub accepted: bool,

    /// Position in the journal (0-based).
    pub sequence: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, accepted: bool, sequence: u64) -> Self {
        Self {
            action,
            accepted,
            sequence,
        }
    }
}
