//! Moves, actions, and the game history.
//!
//! A [`Move`] relocates a single card; an [`Action`] is an ordered list of
//! one or more moves that must be applied atomically (a run relocation is
//! one action of N moves, a talon recycle one action of talon-size moves).
//!
//! ## Canonical ordering
//!
//! Validation checks set membership by sorted-order binary search, so both
//! moves and actions carry a fixed total order:
//!
//! - Moves order by the 6-tuple (old pile, old index, old orientation,
//!   new pile, new index, new orientation), ascending, orientations compared
//!   as their raw bitmask. The derived `Ord` below encodes exactly that via
//!   field declaration order.
//! - Actions order lexicographically move-by-move, a strict prefix sorting
//!   before its extension, with length as the final tiebreak. That is the
//!   derived slice ordering on the move list.
//!
//! [`Action::canonicalize`] sorts an action's moves so that two actions
//! describing the same transformation compare equal regardless of the order
//! their moves arrived in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::STOCK;
use super::placement::Orientation;

/// An atomic relocation of one card.
///
/// Field order is load-bearing: the derived `Ord` is the canonical move
/// ordering used by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub old_pile: usize,
    pub old_index: usize,
    pub old_orientation: Orientation,
    pub new_pile: usize,
    pub new_index: usize,
    pub new_orientation: Orientation,
}

/// An ordered list of moves applied atomically: one legal rules-step.
///
/// Most actions are a single move (flip, draw, foundation move); tableau
/// runs and talon recycles carry more. `SmallVec` keeps the common case off
/// the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action {
    moves: SmallVec<[Move; 4]>,
}

impl Action {
    /// An empty action under construction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An action consisting of one move.
    #[must_use]
    pub fn single(mv: Move) -> Self {
        let mut moves = SmallVec::new();
        moves.push(mv);
        Self { moves }
    }

    /// An action over the given moves, in the given order.
    #[must_use]
    pub fn from_moves(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The moves in their current order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the action carries no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether any move's destination is the stock. An action that enters
    /// the stock is a completed talon recycle, which is what the deck-cycle
    /// gate counts.
    #[must_use]
    pub fn enters_stock(&self) -> bool {
        self.moves.iter().any(|mv| mv.new_pile == STOCK)
    }

    /// Sort the moves into canonical order. Idempotent.
    pub fn canonicalize(&mut self) {
        self.moves.sort_unstable();
    }

    /// Consuming variant of [`Action::canonicalize`].
    #[must_use]
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }
}

impl FromIterator<Move> for Action {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

/// Ordered record of the actions applied to a board since the deal.
///
/// The engine derives a single datum from it: how many times the stock has
/// been exhausted and recycled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    actions: Vec<Action>,
}

impl History {
    /// An empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an applied action.
    pub fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// The recorded actions, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// How many recorded actions completed a talon recycle (any move with
    /// the stock as its destination).
    #[must_use]
    pub fn times_through_deck(&self) -> u32 {
        self.actions
            .iter()
            .filter(|action| action.enters_stock())
            .count() as u32
    }
}

impl From<Vec<Action>> for History {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}
