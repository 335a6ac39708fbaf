//! Card values: suit, rank, and the 104-card Spider deck.
//!
//! A Spider deck is always eight complete 13-card sequences. The suit
//! variant only decides how many distinct suits those sequences use.

use serde::{Deserialize, Serialize};

use super::error::SpiderError;

/// Card suit.
///
/// Declaration order defines the ordering used by `Card`'s `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card rank in `[1, 13]`. 13 (king) is high, 1 (ace) is low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank.
    pub const ACE: Rank = Rank(1);
    /// Highest rank.
    pub const KING: Rank = Rank(13);

    /// Create a rank, rejecting values outside `[1, 13]`.
    pub fn new(value: u8) -> Result<Self, SpiderError> {
        if (1..=13).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SpiderError::InvalidRank { value })
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, or `None` for a king.
    #[must_use]
    pub const fn above(self) -> Option<Rank> {
        if self.0 < 13 {
            Some(Rank(self.0 + 1))
        } else {
            None
        }
    }

    /// Iterate ranks from king down to ace.
    pub fn descending() -> impl Iterator<Item = Rank> {
        (1..=13u8).rev().map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = SpiderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// An immutable playing card.
///
/// Field order matters: the derived ordering compares suit first, then rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card from an already validated rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Create a card from a raw rank value.
    pub fn try_new(suit: Suit, rank: u8) -> Result<Self, SpiderError> {
        Ok(Self::new(suit, Rank::new(rank)?))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

/// Number of distinct suits in play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SuitCount {
    #[default]
    One,
    Two,
    Four,
}

impl SuitCount {
    /// Suits used by this variant.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            SuitCount::One => &Suit::ALL[..1],
            SuitCount::Two => &Suit::ALL[..2],
            SuitCount::Four => &Suit::ALL[..],
        }
    }

    /// Get the raw suit count.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            SuitCount::One => 1,
            SuitCount::Two => 2,
            SuitCount::Four => 4,
        }
    }
}

impl TryFrom<u8> for SuitCount {
    type Error = SpiderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SuitCount::One),
            2 => Ok(SuitCount::Two),
            4 => Ok(SuitCount::Four),
            other => Err(SpiderError::InvalidSuitCount { value: other }),
        }
    }
}

impl From<SuitCount> for u8 {
    fn from(suits: SuitCount) -> u8 {
        suits.count()
    }
}

/// Cards in a full Spider deck.
pub const DECK_SIZE: usize = 104;

/// Complete 13-card sequences in a deck.
pub const SEQUENCES_PER_GAME: u8 = 8;

/// Cards in one complete sequence.
pub const RUN_LENGTH: usize = 13;

/// Build an unshuffled deck: eight king-to-ace sequences, suits cycled
/// through the variant's suit list.
#[must_use]
pub fn build_deck(suits: SuitCount) -> Vec<Card> {
    let palette = suits.suits();
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for i in 0..SEQUENCES_PER_GAME as usize {
        let suit = palette[i % palette.len()];
        deck.extend(Rank::descending().map(|rank| Card::new(suit, rank)));
    }
    deck
}

/// The canonical descending same-suit run starting at `top`, down to ace.
pub fn canonical_run(top: Card) -> impl Iterator<Item = Card> {
    (1..=top.rank.value())
        .rev()
        .map(move |r| Card::new(top.suit, Rank(r)))
}
