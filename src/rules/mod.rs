//! The rules engine: dealing, move generation, gating, validation.
//!
//! Every operation is a pure function of its explicit inputs (board,
//! history, variant, randomness source). The engine never mutates or
//! persists a board; it produces descriptions of legal transformations and
//! checks proposed ones. Applying an accepted action to storage is the
//! caller's job.

pub mod dealer;
pub mod gate;
pub mod generator;
pub mod validator;

pub use dealer::deal;
pub use gate::gated_actions;
pub use generator::next_actions;
pub use validator::validate;
