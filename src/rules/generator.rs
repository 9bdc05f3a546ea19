//! Legal-move enumeration.
//!
//! [`next_actions`] is a pure function of the board: no hidden state, no
//! I/O, O(52) work per call. It emits every action reachable in one
//! rules-step; the deck-cycle gate in [`crate::rules::gate`] decides whether
//! any of them may actually be offered.

use tracing::debug;

use crate::core::action::{Action, Move};
use crate::core::board::{foundation_piles, tableau_piles, Board, STOCK, TALON};
use crate::core::card::{Color, Rank};

/// Destination lookup: for each rank value, the tableau piles whose face-up
/// top card has that rank, split by color. Sized past the highest reserved
/// rank so a lookup at `rank + 1` never needs a bounds branch.
#[derive(Default)]
struct DestinationTables {
    red: [Vec<usize>; 17],
    black: [Vec<usize>; 17],
}

impl DestinationTables {
    fn index(&mut self, color: Color, rank: Rank, pile: usize) {
        match color {
            Color::Red => self.red[rank.value() as usize].push(pile),
            Color::Black => self.black[rank.value() as usize].push(pile),
        }
    }

    /// Piles whose top card is the opposite color of `color` and exactly one
    /// rank above `rank`.
    fn targets(&self, color: Color, rank: Rank) -> &[usize] {
        let wanted = rank.value() as usize + 1;
        match color {
            Color::Red => &self.black[wanted],
            Color::Black => &self.red[wanted],
        }
    }
}

/// Enumerate every legal action reachable from `board` in one rules-step.
///
/// Per invocation:
///
/// 1. Record each foundation's top rank as the next-required rank per suit.
/// 2. Per tableau top: a face-down card yields a flip action and nothing
///    else from that pile; a face-up card is indexed as a run destination
///    and, if it continues its suit's foundation (Ace on an empty one),
///    yields a single-card foundation move.
/// 3. Per face-up card in each tableau pile, the run from that card to the
///    pile's end may relocate onto any opposite-color top exactly one rank
///    above its leading card. One action per (source, destination) pair;
///    runs never split; Aces never land on the tableau.
/// 4. A non-empty stock yields a draw to the talon; an empty stock yields
///    one action returning the whole talon to the stock, reversed and
///    face-down.
#[must_use]
pub fn next_actions(board: &Board) -> Vec<Action> {
    debug_assert!(board.holds_full_deck(), "board must hold one full deck");

    let mut actions = Vec::new();

    // Foundation tops, indexed by suit ordinal - 1. Zero means empty, which
    // makes the adjacency check below accept an Ace (value 1) for free.
    let mut foundation_top = [0u8; 4];
    for (slot, pile) in foundation_piles().enumerate() {
        if let Some(top) = board.pile(pile).last() {
            foundation_top[slot] = top.card.rank.value();
        }
    }

    let mut tables = DestinationTables::default();

    for pile_no in tableau_piles() {
        let pile = board.pile(pile_no);
        let Some(top) = pile.last() else { continue };
        let top_index = pile.len() - 1;

        if !top.orientation.is_face_up() {
            // Flip the face-down top in place. The pile offers nothing else
            // until the flip has been applied.
            actions.push(Action::single(Move {
                old_pile: pile_no,
                old_index: top_index,
                old_orientation: top.orientation,
                new_pile: pile_no,
                new_index: top_index,
                new_orientation: top.orientation.face_up(),
            }));
            continue;
        }

        let Some(color) = top.card.suit.color() else {
            continue;
        };
        tables.index(color, top.card.rank, pile_no);

        let slot = top.card.suit as usize - 1;
        if foundation_top[slot] + 1 == top.card.rank.value() {
            if let Some(foundation) = top.card.suit.foundation_pile() {
                actions.push(Action::single(Move {
                    old_pile: pile_no,
                    old_index: top_index,
                    old_orientation: top.orientation,
                    new_pile: foundation,
                    new_index: board.pile(foundation).len(),
                    new_orientation: top.orientation,
                }));
            }
        }
    }

    for pile_no in tableau_piles() {
        let pile = board.pile(pile_no);
        for (start, lead) in pile.iter().enumerate() {
            if !lead.orientation.is_face_up() {
                continue;
            }
            // Only foundations accept Aces.
            if lead.card.rank == Rank::Ace {
                continue;
            }
            let Some(color) = lead.card.suit.color() else {
                continue;
            };
            for &dest in tables.targets(color, lead.card.rank) {
                let dest_len = board.pile(dest).len();
                let action: Action = pile
                    .iter()
                    .enumerate()
                    .skip(start)
                    .map(|(i, placed)| Move {
                        old_pile: pile_no,
                        old_index: i,
                        old_orientation: placed.orientation,
                        new_pile: dest,
                        new_index: dest_len + (i - start),
                        new_orientation: placed.orientation.face_up(),
                    })
                    .collect();
                actions.push(action);
            }
        }
    }

    let stock = board.pile(STOCK);
    let talon = board.pile(TALON);
    if let Some(top) = stock.last() {
        actions.push(Action::single(Move {
            old_pile: STOCK,
            old_index: stock.len() - 1,
            old_orientation: top.orientation,
            new_pile: TALON,
            new_index: talon.len(),
            new_orientation: top.orientation.face_up(),
        }));
    } else if !talon.is_empty() {
        // Return the talon to the stock in reverse order, face-down.
        let len = talon.len();
        let action: Action = (0..len)
            .map(|i| {
                let placed = &talon[len - 1 - i];
                Move {
                    old_pile: TALON,
                    old_index: len - 1 - i,
                    old_orientation: placed.orientation,
                    new_pile: STOCK,
                    new_index: i,
                    new_orientation: placed.orientation.face_down(),
                }
            })
            .collect();
        actions.push(action);
    }

    debug!(count = actions.len(), "enumerated next actions");
    actions
}
