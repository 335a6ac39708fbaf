//! Snapshots and the undo history.
//!
//! A `Snapshot` is a value copy of everything undo restores: every pile
//! (cards and face-down count), the stock, the completed count and the
//! score. Movement count is deliberately absent since undo itself counts
//! as a move.
//!
//! Piles and stock are `im::Vector`s, so taking a snapshot is a handful of
//! reference-count bumps rather than a deep copy, and later mutation of the
//! live state never shows through.

use std::num::NonZeroUsize;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, SEQUENCES_PER_GAME};
use crate::core::config::PILE_COUNT;
use crate::core::error::{SpiderError, SpiderResult};
use crate::tableau::Sequence;

/// Immutable capture of undoable game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// The ten piles, slot order.
    pub piles: Vec<Sequence>,

    /// Undealt cards; the next deal takes from the end.
    pub stock: Vector<Card>,

    /// Completed sequences removed so far.
    pub completed: u8,

    /// Score at capture time.
    pub score: i32,
}

impl Snapshot {
    /// Check structural invariants.
    ///
    /// Every non-empty pile must show its top card; a snapshot taken at
    /// rest always does.
    pub fn validate(&self) -> SpiderResult<()> {
        if self.piles.len() != PILE_COUNT {
            return Err(SpiderError::PileCount {
                found: self.piles.len(),
                expected: PILE_COUNT,
            });
        }
        for (pile, seq) in self.piles.iter().enumerate() {
            if seq.hidden_count() > 0 && seq.hidden_count() >= seq.len() {
                return Err(SpiderError::HiddenOverflow {
                    pile,
                    hidden: seq.hidden_count(),
                    len: seq.len(),
                });
            }
        }
        if self.completed > SEQUENCES_PER_GAME {
            return Err(SpiderError::CompletedOverflow {
                value: self.completed,
                max: SEQUENCES_PER_GAME,
            });
        }
        Ok(())
    }

    /// Cards in piles and stock.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Sequence::len).sum::<usize>() + self.stock.len()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> SpiderResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode and validate.
    pub fn from_bytes(bytes: &[u8]) -> SpiderResult<Self> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Append-only snapshot history.
///
/// Unbounded unless a limit is given; with a limit the oldest snapshot is
/// evicted on overflow and the oldest retained one becomes the undo floor.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<Snapshot>,
    limit: Option<NonZeroUsize>,
}

impl History {
    /// Create a history seeded with its genesis snapshot.
    #[must_use]
    pub fn new(genesis: Snapshot, limit: Option<NonZeroUsize>) -> Self {
        let mut history = Self {
            snapshots: Vector::new(),
            limit,
        };
        history.push(genesis);
        history
    }

    /// Append a snapshot, evicting the oldest if over the limit.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit.get() {
                self.snapshots.pop_front();
            }
        }
    }

    /// Drop the newest snapshot and return the one now newest.
    ///
    /// Returns `None`, leaving history untouched, when fewer than two
    /// snapshots remain.
    pub fn rewind(&mut self) -> Option<Snapshot> {
        if self.snapshots.len() < 2 {
            return None;
        }
        self.snapshots.pop_back();
        self.snapshots.back().cloned()
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn snapshot(score: i32) -> Snapshot {
        Snapshot {
            piles: vec![Sequence::default(); PILE_COUNT],
            stock: Vector::new(),
            completed: 0,
            score,
        }
    }

    #[test]
    fn test_validate_pile_count() {
        let mut snap = snapshot(0);
        snap.piles.pop();
        assert!(matches!(
            snap.validate(),
            Err(SpiderError::PileCount { found: 9, expected: 10 })
        ));
    }

    #[test]
    fn test_validate_rejects_face_down_top() {
        let cards = vec![
            Card::try_new(Suit::Spades, 3).unwrap(),
            Card::try_new(Suit::Spades, 2).unwrap(),
        ];
        let mut snap = snapshot(0);
        snap.piles[0] = Sequence::with_hidden(cards.clone(), 2).unwrap();
        assert!(matches!(
            snap.validate(),
            Err(SpiderError::HiddenOverflow { pile: 0, hidden: 2, len: 2 })
        ));

        snap.piles[0] = Sequence::with_hidden(cards, 1).unwrap();
        assert!(snap.validate().is_ok());
    }

    #[test]
    fn test_validate_completed() {
        let mut snap = snapshot(0);
        snap.completed = 9;
        assert!(matches!(snap.validate(), Err(SpiderError::CompletedOverflow { .. })));
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut snap = snapshot(480);
        snap.piles[3] = Sequence::new(vec![Card::try_new(Suit::Hearts, 4).unwrap()]);
        snap.stock.push_back(Card::try_new(Suit::Spades, 13).unwrap());

        let bytes = snap.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snap);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Snapshot::from_bytes(&[0xff, 0x01]),
            Err(SpiderError::Codec(_))
        ));
    }

    #[test]
    fn test_history_rewind_floor() {
        let mut history = History::new(snapshot(0), None);
        assert_eq!(history.rewind(), None);
        assert_eq!(history.len(), 1);

        history.push(snapshot(1));
        history.push(snapshot(2));
        assert_eq!(history.rewind().map(|s| s.score), Some(1));
        assert_eq!(history.rewind().map(|s| s.score), Some(0));
        assert_eq!(history.rewind(), None);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_limit_evicts_oldest() {
        let limit = NonZeroUsize::new(3).unwrap();
        let mut history = History::new(snapshot(0), Some(limit));
        for score in 1..=5 {
            history.push(snapshot(score));
        }
        assert_eq!(history.len(), 3);

        assert_eq!(history.rewind().map(|s| s.score), Some(4));
        assert_eq!(history.rewind().map(|s| s.score), Some(3));
        assert_eq!(history.rewind(), None);
    }
}
