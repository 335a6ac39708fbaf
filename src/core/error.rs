//! Error types for fallible construction and decoding.
//!
//! Game operations never fail with an error: an illegal hold, put, deal or
//! undo is reported as `false`. Errors only come from building values out
//! of untrusted input.

use thiserror::Error;

/// Errors raised while constructing cards, variants or snapshots.
#[derive(Debug, Error)]
pub enum SpiderError {
    /// Rank outside `[1, 13]`.
    #[error("rank {value} is outside 1..=13")]
    InvalidRank { value: u8 },

    /// Suit count other than 1, 2 or 4.
    #[error("unsupported suit count {value} (expected 1, 2 or 4)")]
    InvalidSuitCount { value: u8 },

    /// Snapshot does not describe ten piles.
    #[error("snapshot has {found} piles, expected {expected}")]
    PileCount { found: usize, expected: usize },

    /// A pile hides its top card, or more cards than it holds.
    #[error("pile {pile} hides {hidden} of {len} cards, leaving no face-up top")]
    HiddenOverflow { pile: usize, hidden: usize, len: usize },

    /// Completed sequence count beyond the number of sequences in a deck.
    #[error("completed count {value} exceeds {max}")]
    CompletedOverflow { value: u8, max: u8 },

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot codec failure: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result type alias for spider-solitaire.
pub type SpiderResult<T> = Result<T, SpiderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rank_display() {
        let err = SpiderError::InvalidRank { value: 14 };
        assert_eq!(err.to_string(), "rank 14 is outside 1..=13");
    }

    #[test]
    fn test_hidden_overflow_display() {
        let err = SpiderError::HiddenOverflow { pile: 3, hidden: 5, len: 2 };
        assert!(err.to_string().contains("pile 3"));
    }

    #[test]
    fn test_decode_error_conversion() {
        let bad: Result<u64, bincode::Error> = bincode::deserialize(&[1u8]);
        let err: SpiderError = bad.unwrap_err().into();
        assert!(matches!(err, SpiderError::Codec(_)));
    }
}
