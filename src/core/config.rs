//! Game configuration and the fixed rule constants.
//!
//! A `SpiderConfig` picks the variant (suit count), the deal seed, whether
//! score and move counters are tracked, and an optional cap on undo history.
//! Scoring values themselves are fixed.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::card::SuitCount;

/// Number of tableau piles.
pub const PILE_COUNT: usize = 10;

/// Initial pile sizes: the first four piles get six cards, the rest five.
pub const INITIAL_PILE_SIZES: [usize; PILE_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Score at the start of a scored game.
pub const INITIAL_SCORE: i32 = 500;

/// Score awarded for each completed sequence.
pub const COMPLETION_BONUS: i32 = 100;

/// Score deducted for each deal from the stock.
pub const DEAL_PENALTY: i32 = 1;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderConfig {
    /// Suit variant.
    pub suits: SuitCount,

    /// Deal seed. `None` draws a seed from the thread RNG at construction.
    pub seed: Option<u64>,

    /// Track score and movement count.
    pub scoring: bool,

    /// Maximum snapshots kept for undo. `None` keeps the full history.
    pub history_limit: Option<NonZeroUsize>,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            suits: SuitCount::One,
            seed: None,
            scoring: true,
            history_limit: None,
        }
    }
}

impl SpiderConfig {
    /// Create a configuration for the given suit variant.
    #[must_use]
    pub fn new(suits: SuitCount) -> Self {
        Self {
            suits,
            ..Self::default()
        }
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable score and movement tracking.
    #[must_use]
    pub fn without_scoring(mut self) -> Self {
        self.scoring = false;
        self
    }

    /// Cap undo history at `limit` snapshots, evicting the oldest.
    #[must_use]
    pub fn with_history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// The configured seed, or a freshly drawn one.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pile_sizes_total() {
        assert_eq!(INITIAL_PILE_SIZES.iter().sum::<usize>(), 54);
    }

    #[test]
    fn test_default_config() {
        let config = SpiderConfig::default();
        assert_eq!(config.suits, SuitCount::One);
        assert!(config.scoring);
        assert_eq!(config.seed, None);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_config_builder() {
        let limit = NonZeroUsize::new(16).unwrap();
        let config = SpiderConfig::new(SuitCount::Four)
            .with_seed(7)
            .without_scoring()
            .with_history_limit(limit);

        assert_eq!(config.suits, SuitCount::Four);
        assert_eq!(config.seed, Some(7));
        assert!(!config.scoring);
        assert_eq!(config.history_limit, Some(limit));
        assert_eq!(config.resolve_seed(), 7);
    }

    #[test]
    fn test_config_serde() {
        let config = SpiderConfig::new(SuitCount::Two).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: SpiderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
