//! Deterministic shuffle-and-deal into the fixed 13-pile layout.

use tracing::debug;

use crate::core::board::{tableau_piles, Board, STOCK};
use crate::core::card::standard_deck;
use crate::core::placement::PlacedCard;
use crate::core::rng::DealRng;

/// Deal a fresh board from the caller-supplied randomness source.
///
/// The 52-card deck is built in the documented enumeration order
/// ([`standard_deck`]), permuted by an unbiased Fisher–Yates shuffle driven
/// entirely by `rng`, and distributed:
///
/// - tableau piles 2..=8 take runs of 1,2,3,4,5,6,7 cards off the front of
///   the shuffled sequence
/// - the stock takes the remaining 24
/// - talon and foundations start empty
///
/// Every card is dealt face-down; flipping tableau tops face-up is a legal
/// action the move generator emits, not something the dealer does.
///
/// Identical `rng` state produces a byte-identical board.
#[must_use]
pub fn deal(rng: &mut DealRng) -> Board {
    let mut cards: Vec<PlacedCard> = standard_deck()
        .into_iter()
        .map(PlacedCard::face_down)
        .collect();
    rng.shuffle(&mut cards);

    let mut board = Board::new();
    let mut rest = cards.into_iter();
    for (run, pile) in tableau_piles().enumerate() {
        board.piles[pile] = rest.by_ref().take(run + 1).collect();
    }
    board.piles[STOCK] = rest.collect();

    debug_assert!(board.holds_full_deck());
    debug!(seed = rng.seed(), "dealt new board");
    board
}
