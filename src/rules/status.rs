//! Game status.

use serde::{Deserialize, Serialize};

use crate::core::card::SEQUENCES_PER_GAME;

/// Whether a game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Sequences remain to be completed.
    InProgress,
    /// All eight sequences are complete.
    Won,
}

impl GameStatus {
    /// Status for a given number of completed sequences.
    #[must_use]
    pub fn from_completed(completed: u8) -> Self {
        if completed >= SEQUENCES_PER_GAME {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_completed() {
        assert_eq!(GameStatus::from_completed(0), GameStatus::InProgress);
        assert_eq!(GameStatus::from_completed(7), GameStatus::InProgress);
        assert_eq!(GameStatus::from_completed(8), GameStatus::Won);
        assert!(GameStatus::from_completed(8).is_won());
    }
}
