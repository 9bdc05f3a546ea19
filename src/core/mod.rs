//! Core value types: cards, placement, board, moves, variant, RNG.
//!
//! Everything here is an immutable value with serde derives; the rules
//! engine in [`crate::rules`] is a set of pure functions over these types.

pub mod action;
pub mod board;
pub mod card;
pub mod placement;
pub mod rng;
pub mod variant;

pub use action::{Action, History, Move};
pub use board::{
    foundation_piles, tableau_piles, Board, FOUNDATION_COUNT, FOUNDATION_START, PILE_COUNT, STOCK,
    TABLEAU_COUNT, TABLEAU_START, TALON,
};
pub use card::{standard_deck, Card, Color, Rank, Suit};
pub use placement::{Orientation, PlacedCard};
pub use rng::{DealRng, DealRngState};
pub use variant::Variant;
