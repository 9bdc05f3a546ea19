//! Deck-cycle gate: suppresses further play once the stock has been
//! recycled as many times as the variant allows.

use tracing::debug;

use crate::core::action::{Action, History};
use crate::core::board::Board;
use crate::core::variant::Variant;

use super::generator::next_actions;

/// Enumerate next actions subject to the variant's deck-cycle limit.
///
/// Counts completed talon recycles in `history` (actions containing a move
/// into the stock). At or past a non-zero limit this returns an empty
/// sequence, suppressing all next actions; otherwise it delegates to
/// [`next_actions`] unchanged.
#[must_use]
pub fn gated_actions(board: &Board, history: &History, variant: &Variant) -> Vec<Action> {
    let completed = history.times_through_deck();
    if !variant.allows_another_pass(completed) {
        debug!(
            completed,
            limit = variant.max_times_through_deck,
            "deck-cycle limit reached, suppressing all moves"
        );
        return Vec::new();
    }
    next_actions(board)
}
