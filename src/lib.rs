//! # solitaire-engine
//!
//! Rules engine for a Klondike solitaire backend: deterministic deck
//! dealing, legal-move enumeration over an arbitrary board state, and
//! candidate-move validation by canonical-order matching.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: every operation is a function of its explicit
//!    inputs (board, history, variant, randomness source). No hidden state,
//!    no I/O, no process-global entropy.
//!
//! 2. **The engine describes, callers apply**: generation and validation
//!    produce and check descriptions of legal transformations; mutating or
//!    persisting board state is the surrounding service's job.
//!
//! 3. **Cheap snapshots**: boards clone in O(1) via `im` persistent piles,
//!    so callers may generate and validate concurrently against the same
//!    immutable snapshot.
//!
//! ## Modules
//!
//! - `core`: cards, placement, board, moves/actions/history, variant, RNG
//! - `rules`: dealer, move generator, deck-cycle gate, validator
//! - `error`: category-tagged errors for transport mapping
//! - `session`: saved-game shapes for the persistence boundary
//!
//! ## Pile convention
//!
//! Boards hold 13 piles: 0 = stock, 1 = talon, 2..=8 = tableau,
//! 9..=12 = foundations in suit-ordinal order. The 13 piles always hold
//! exactly one standard 52-card deck.

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    foundation_piles, standard_deck, tableau_piles, Action, Board, Card, Color, DealRng,
    DealRngState, History, Move, Orientation, PlacedCard, Rank, Suit, Variant, FOUNDATION_COUNT,
    FOUNDATION_START, PILE_COUNT, STOCK, TABLEAU_COUNT, TABLEAU_START, TALON,
};

pub use crate::error::{EngineError, ErrorCategory};
pub use crate::rules::{deal, gated_actions, next_actions, validate};
pub use crate::session::{SavedGameDetail, SavedGameSummary};
