//! Board state: thirteen piles of placed cards plus a score.
//!
//! Pile indices are a fixed convention shared with persistence and
//! transport:
//!
//! | index | pile |
//! |-------|------|
//! | 0     | stock (face-down draw pile) |
//! | 1     | talon (face-up drawn cards) |
//! | 2..=8 | the seven tableau piles |
//! | 9..=12| the four foundations, one per suit in suit-ordinal order |
//!
//! Piles are `im::Vector`s so cloning a board is O(1); request handling can
//! snapshot state freely while the engine works on an immutable view.
//!
//! Invariant: across all thirteen piles a board holds exactly one standard
//! 52-card deck for the lifetime of a game. A board that does not is a data
//! integrity bug in the caller, not a runtime condition the engine handles.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{standard_deck, Card};
use super::placement::PlacedCard;

/// Pile index of the stock.
pub const STOCK: usize = 0;

/// Pile index of the talon.
pub const TALON: usize = 1;

/// First tableau pile index.
pub const TABLEAU_START: usize = 2;

/// First foundation pile index.
pub const FOUNDATION_START: usize = 9;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Total number of piles on a board.
pub const PILE_COUNT: usize = 13;

/// The tableau pile indices, 2..=8.
#[must_use]
pub fn tableau_piles() -> std::ops::Range<usize> {
    TABLEAU_START..TABLEAU_START + TABLEAU_COUNT
}

/// The foundation pile indices, 9..=12.
#[must_use]
pub fn foundation_piles() -> std::ops::Range<usize> {
    FOUNDATION_START..FOUNDATION_START + FOUNDATION_COUNT
}

/// The current state of a game's board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The thirteen piles, indexed by the module's pile constants.
    pub piles: [Vector<PlacedCard>; PILE_COUNT],

    /// Current score.
    pub score: i32,
}

impl Board {
    /// An empty board: thirteen empty piles, score zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a pile by index.
    ///
    /// # Panics
    ///
    /// Panics if `pile` is not a valid pile index (< 13).
    #[must_use]
    pub fn pile(&self, pile: usize) -> &Vector<PlacedCard> {
        &self.piles[pile]
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Vector::len).sum()
    }

    /// Whether the piles together hold exactly one standard 52-card deck.
    ///
    /// Backs the fail-fast `debug_assert!`s at engine entry points.
    #[must_use]
    pub fn holds_full_deck(&self) -> bool {
        if self.card_count() != 52 {
            return false;
        }
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        for pile in &self.piles {
            for placed in pile {
                seen.insert(placed.card);
            }
        }
        standard_deck().iter().all(|card| seen.contains(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.card_count(), 0);
        assert_eq!(board.score, 0);
        assert!(!board.holds_full_deck());
    }

    #[test]
    fn test_full_deck_detection() {
        let mut board = Board::new();
        for card in standard_deck() {
            board.piles[STOCK].push_back(PlacedCard::face_down(card));
        }
        assert!(board.holds_full_deck());

        // A duplicate in place of a missing card keeps the count at 52 but
        // breaks the multiset.
        let mut broken = board.clone();
        broken.piles[STOCK].pop_back();
        broken.piles[TALON].push_back(PlacedCard::face_down(Card::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(broken.card_count(), 52);
        assert!(!broken.holds_full_deck());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new();
        board.piles[STOCK].push_back(PlacedCard::face_down(Card::new(Suit::Spades, Rank::King)));
        let snapshot = board.clone();
        board.piles[STOCK].pop_back();
        assert_eq!(snapshot.card_count(), 1);
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_board_serde_round_trip() {
        let mut board = Board::new();
        board.score = 15;
        board.piles[TALON].push_back(PlacedCard::face_up(Card::new(Suit::Clubs, Rank::Ten)));
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
