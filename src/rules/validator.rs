//! Candidate-move validation by canonical-order matching.

use tracing::debug;

use crate::core::action::{Action, History};
use crate::core::board::Board;
use crate::core::variant::Variant;
use crate::error::EngineError;

use super::gate::gated_actions;

/// Check a proposed action against the set of legal next actions.
///
/// The legal set comes from [`gated_actions`]. Both the proposal and every
/// legal action are canonicalized (moves sorted under the fixed 6-tuple
/// order), the legal set is sorted under the induced action order, and the
/// proposal is binary-searched for an exact match: same length, same moves,
/// same canonical order.
///
/// Sorting plus one search replaces a hand-written reorder-robust
/// equality/hash scheme, and the same comparator serves both steps.
///
/// A miss is a [semantic error](crate::error::ErrorCategory::Semantic): the
/// proposal is well-formed but violates the rules. The engine raises no
/// other error category.
pub fn validate(
    board: &Board,
    history: &History,
    variant: &Variant,
    proposed: &Action,
) -> Result<(), EngineError> {
    let mut legal = gated_actions(board, history, variant);
    for action in &mut legal {
        action.canonicalize();
    }
    legal.sort_unstable();

    let candidate = proposed.clone().canonicalized();
    if legal.binary_search(&candidate).is_ok() {
        Ok(())
    } else {
        debug!(moves = candidate.len(), "rejected proposed action");
        Err(EngineError::invalid_move())
    }
}
