//! Run detection.

use crate::core::card::{canonical_run, Card, Rank, RUN_LENGTH};

/// True if `cards` is a strictly descending, same-suit, unit-step run.
///
/// Equivalent to `cards` matching the canonical run that starts at its
/// first card, truncated to `cards.len()`. An empty slice is not a run.
#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    match cards.first() {
        Some(&first) => cards
            .iter()
            .copied()
            .eq(canonical_run(first).take(cards.len())),
        None => false,
    }
}

/// True if `cards` is exactly one full king-to-ace same-suit run.
#[must_use]
pub fn is_complete_run(cards: &[Card]) -> bool {
    cards.len() == RUN_LENGTH && cards[0].rank == Rank::KING && is_run(cards)
}

/// True if `card` may be placed on a pile whose top card is `top`.
///
/// Empty piles (`None`) accept anything. Otherwise the top must be exactly
/// one rank higher; suit is ignored.
#[must_use]
pub fn can_stack(top: Option<Card>, card: Card) -> bool {
    match top {
        None => true,
        Some(top) => card.rank.above() == Some(top.rank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn cards(suit: Suit, ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::try_new(suit, r).unwrap()).collect()
    }

    #[test]
    fn test_single_card_is_run() {
        assert!(is_run(&cards(Suit::Spades, &[7])));
    }

    #[test]
    fn test_empty_is_not_run() {
        assert!(!is_run(&[]));
    }

    #[test]
    fn test_descending_run() {
        assert!(is_run(&cards(Suit::Hearts, &[9, 8, 7, 6])));
    }

    #[test]
    fn test_gap_breaks_run() {
        assert!(!is_run(&cards(Suit::Hearts, &[9, 7, 6])));
    }

    #[test]
    fn test_ascending_breaks_run() {
        assert!(!is_run(&cards(Suit::Hearts, &[5, 6])));
    }

    #[test]
    fn test_mixed_suits_break_run() {
        let mut run = cards(Suit::Spades, &[5, 4]);
        run.extend(cards(Suit::Hearts, &[3]));
        assert!(!is_run(&run));
    }

    #[test]
    fn test_complete_run() {
        let full: Vec<u8> = (1..=13).rev().collect();
        assert!(is_complete_run(&cards(Suit::Clubs, &full)));
        assert!(!is_complete_run(&cards(Suit::Clubs, &full[1..])));

        let mut mixed = cards(Suit::Clubs, &full[..12]);
        mixed.extend(cards(Suit::Spades, &[1]));
        assert!(!is_complete_run(&mixed));
    }

    #[test]
    fn test_can_stack_ignores_suit() {
        let top = Card::try_new(Suit::Spades, 8).unwrap();
        assert!(can_stack(Some(top), Card::try_new(Suit::Hearts, 7).unwrap()));
        assert!(can_stack(Some(top), Card::try_new(Suit::Spades, 7).unwrap()));
        assert!(!can_stack(Some(top), Card::try_new(Suit::Spades, 6).unwrap()));
        assert!(!can_stack(Some(top), Card::try_new(Suit::Spades, 9).unwrap()));
    }

    #[test]
    fn test_can_stack_on_empty() {
        assert!(can_stack(None, Card::try_new(Suit::Diamonds, 1).unwrap()));
        assert!(can_stack(None, Card::try_new(Suit::Diamonds, 13).unwrap()));
    }

    #[test]
    fn test_nothing_stacks_on_ace() {
        let ace = Card::try_new(Suit::Spades, 1).unwrap();
        for r in 1..=13 {
            assert!(!can_stack(Some(ace), Card::try_new(Suit::Spades, r).unwrap()));
        }
    }
}
