//! A single tableau pile.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, RUN_LENGTH};
use crate::rules::{can_stack, is_complete_run, is_run};

/// A run of cards in transit between piles.
///
/// Liftable runs are at most one full sequence long, so the common case
/// never touches the heap.
pub type Run = SmallVec<[Card; RUN_LENGTH]>;

/// One tableau pile, bottom card first.
///
/// The bottom `hidden` cards are face-down. `visible_index()` reports the
/// index of the topmost face-down card (`-1` when none are hidden), so
/// cards at indices greater than it are face-up.
///
/// Cards live in an `im::Vector`, so cloning a pile for a snapshot shares
/// structure instead of copying.
///
/// ## Usage
///
/// ```
/// use spider_solitaire::core::{Card, Suit};
/// use spider_solitaire::tableau::Sequence;
///
/// let cards: Vec<Card> = [9, 8, 7]
///     .iter()
///     .map(|&r| Card::try_new(Suit::Spades, r).unwrap())
///     .collect();
/// let pile = Sequence::new(cards);
///
/// // Freshly dealt piles show only their top card.
/// assert_eq!(pile.visible_index(), 1);
/// assert!(pile.can_pick(2));
/// assert!(!pile.can_pick(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    cards: Vector<Card>,
    hidden: usize,
}

impl Sequence {
    /// Create a freshly dealt pile: every card but the top is face-down.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let hidden = cards.len().saturating_sub(1);
        Self { cards, hidden }
    }

    /// Create a pile with an explicit face-down count.
    ///
    /// Returns `None` if `hidden` exceeds the number of cards.
    pub fn with_hidden(cards: impl IntoIterator<Item = Card>, hidden: usize) -> Option<Self> {
        let cards: Vector<Card> = cards.into_iter().collect();
        (hidden <= cards.len()).then_some(Self { cards, hidden })
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True iff no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of face-down cards.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden
    }

    /// Index of the topmost face-down card, `-1` when all are face-up.
    #[must_use]
    pub fn visible_index(&self) -> isize {
        self.hidden as isize - 1
    }

    /// True if the card at `index` is face-up.
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        index >= self.hidden && index < self.cards.len()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// True if the cards from `index` to the top form a liftable run.
    ///
    /// The start must be face-up and the whole tail must be a descending
    /// same-suit unit-step run.
    #[must_use]
    pub fn can_pick(&self, index: usize) -> bool {
        if !self.is_face_up(index) {
            return false;
        }
        // A run can never be longer than one full sequence.
        if self.cards.len() - index > RUN_LENGTH {
            return false;
        }
        is_run(&self.tail(index))
    }

    /// True if `card` may be dropped on this pile.
    #[must_use]
    pub fn can_put(&self, card: Card) -> bool {
        can_stack(self.top(), card)
    }

    /// Remove a complete king-to-ace run from the top, if present.
    ///
    /// The run must sit entirely above the face-down cards and end at the
    /// top of the pile. Returns true if a run was removed.
    pub fn check_done(&mut self) -> bool {
        let len = self.cards.len();
        if len < RUN_LENGTH {
            return false;
        }
        let start = len - RUN_LENGTH;
        if start < self.hidden || !is_complete_run(&self.tail(start)) {
            return false;
        }
        self.cards.truncate(start);
        true
    }

    /// Flip the top card face-up if every remaining card is face-down.
    pub fn update_visibility(&mut self) {
        if self.hidden > 0 && self.cards.len() == self.hidden {
            self.hidden -= 1;
        }
    }

    /// Detach and return every card from `index` to the top.
    ///
    /// Callers check `can_pick` first; an out-of-range index yields an
    /// empty run.
    pub fn take_from(&mut self, index: usize) -> Run {
        if index >= self.cards.len() {
            return Run::new();
        }
        self.cards.split_off(index).into_iter().collect()
    }

    /// Append `run` on top, preserving its order.
    pub fn extend(&mut self, run: impl IntoIterator<Item = Card>) {
        for card in run {
            self.cards.push_back(card);
        }
    }

    /// Place a single card on top (a deal).
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    fn tail(&self, index: usize) -> Run {
        self.cards.iter().skip(index).copied().collect()
    }
}
