//! Card value types: suits, ranks, and the standard deck.
//!
//! Ordinals carry meaning:
//! - `Suit` ordinals select a foundation pile and discriminate color
//!   (Hearts/Diamonds red, Clubs/Spades black).
//! - `Rank` ordinals define adjacency ("one rank above") for foundation
//!   and tableau sequencing.
//!
//! The deck enumeration order produced by [`standard_deck`] is part of the
//! observable dealing contract: seeded shuffles are only reproducible while
//! this order stays stable.

use serde::{Deserialize, Serialize};

use super::board::FOUNDATION_START;

/// The pip part of a card.
///
/// `Joker` is reserved for non-standard decks; it has no color and no
/// foundation pile, and never appears in the 52-card deck the engine deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 1,
    Clubs = 2,
    Diamonds = 3,
    Spades = 4,
    Joker = 5,
}

/// Tableau stacking color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// The four suits of a standard deck, in enumeration order.
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    /// Stacking color, or `None` for jokers.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Suit::Hearts | Suit::Diamonds => Some(Color::Red),
            Suit::Clubs | Suit::Spades => Some(Color::Black),
            Suit::Joker => None,
        }
    }

    /// Board pile index of this suit's foundation (9..=12), or `None` for
    /// jokers. Foundations are laid out in suit-ordinal order.
    #[must_use]
    pub fn foundation_pile(self) -> Option<usize> {
        match self {
            Suit::Joker => None,
            suit => Some(FOUNDATION_START - 1 + suit as usize),
        }
    }
}

/// The value part of a card.
///
/// `Juggler` and `Fool` are reserved for non-standard decks and never appear
/// in the dealt 52-card deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Juggler = 14,
    Fool = 15,
}

impl Rank {
    /// The thirteen ranks of a standard deck, Ace to King.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value used for adjacency arithmetic (Ace = 1).
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// An immutable card value. No identity beyond (suit, rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// The 52-card deck in its documented enumeration order: suit-major
/// (Hearts, Clubs, Diamonds, Spades), Ace to King within each suit.
///
/// Seeded deals permute exactly this sequence, so reordering it is a
/// breaking change to the dealing contract.
#[must_use]
pub fn standard_deck() -> [Card; 52] {
    let mut deck = [Card::new(Suit::Hearts, Rank::Ace); 52];
    let mut i = 0;
    for suit in Suit::STANDARD {
        for rank in Rank::STANDARD {
            deck[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Hearts.color(), Some(Color::Red));
        assert_eq!(Suit::Diamonds.color(), Some(Color::Red));
        assert_eq!(Suit::Clubs.color(), Some(Color::Black));
        assert_eq!(Suit::Spades.color(), Some(Color::Black));
        assert_eq!(Suit::Joker.color(), None);
    }

    #[test]
    fn test_foundation_piles() {
        assert_eq!(Suit::Hearts.foundation_pile(), Some(9));
        assert_eq!(Suit::Clubs.foundation_pile(), Some(10));
        assert_eq!(Suit::Diamonds.foundation_pile(), Some(11));
        assert_eq!(Suit::Spades.foundation_pile(), Some(12));
        assert_eq!(Suit::Joker.foundation_pile(), None);
    }

    #[test]
    fn test_rank_adjacency() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Two.value(), Rank::Ace.value() + 1);
    }

    #[test]
    fn test_standard_deck_is_distinct() {
        let deck = standard_deck();
        for (i, a) in deck.iter().enumerate() {
            for b in deck.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_standard_deck_order_is_stable() {
        let deck = standard_deck();
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck[12], Card::new(Suit::Hearts, Rank::King));
        assert_eq!(deck[13], Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::King));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Suit::Spades, Rank::Queen);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
