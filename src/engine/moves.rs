//! Move enumeration and card accounting.
//!
//! These are built purely on the engine's public operations and queries.

use rustc_hash::FxHashMap;

use crate::core::action::Move;
use crate::core::card::Card;

use super::solitaire::{PutOutcome, Solitaire};

impl Solitaire {
    /// Every legal pile-to-pile move in the current position.
    ///
    /// Ordered by source pile, then start index, then destination. Empty
    /// while a run is held, since nothing else can be lifted.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.is_holding() {
            return moves;
        }

        for (from, source) in self.piles().iter().enumerate() {
            for index in source.hidden_count()..source.len() {
                if !source.can_pick(index) {
                    continue;
                }
                let bottom = source.cards()[index];
                for (to, dest) in self.piles().iter().enumerate() {
                    if to != from && dest.can_put(bottom) {
                        moves.push(Move::new(from, index, to));
                    }
                }
            }
        }
        moves
    }

    /// Hold then put in one call.
    ///
    /// Returns `None` if the run could not be lifted (nothing changes),
    /// otherwise how the drop resolved.
    pub fn try_move(&mut self, mv: Move) -> Option<PutOutcome> {
        if !self.hold(mv.from, mv.index) {
            return None;
        }
        Some(self.put_with_outcome(mv.to, mv.from))
    }

    /// Count of every card in piles, stock and the held run.
    ///
    /// Together with 13 cards per completed sequence this always accounts
    /// for the whole deck.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, u32> {
        let mut counts: FxHashMap<Card, u32> = FxHashMap::default();
        let piles = self.piles().iter().flat_map(|pile| pile.cards().iter());
        let held = self.held().into_iter().flat_map(|held| held.cards().iter());

        for &card in piles.chain(self.stock().iter()).chain(held) {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }
}
