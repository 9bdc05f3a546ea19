//! Category-tagged errors.
//!
//! Every failure carries a coarse [`ErrorCategory`] so transport layers can
//! map it to a client-facing status without inspecting messages. A category
//! is at least fine-grained enough to correspond to a single status code.
//!
//! The engine itself only ever raises [`ErrorCategory::Semantic`] (a
//! well-formed but rule-violating move); the remaining categories belong to
//! the surrounding service. A malformed board or variant is a data
//! integrity bug, guarded by `debug_assert!` at engine entry points rather
//! than handled at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure classification for transport mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Well-formed input that violates game rules.
    Semantic,
    /// Structurally invalid input.
    Malformed,
    /// A dependency was unreachable or refused.
    Unavailable,
    /// The operation is not implemented.
    Unimplemented,
    /// The referenced entity does not exist.
    NotFound,
    /// Anything else.
    Unknown,
}

/// An error tagged with its category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    category: ErrorCategory,
    message: String,
}

impl EngineError {
    /// Create an error with an explicit category.
    #[must_use]
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// The semantic error raised when a proposed move is not among the
    /// legal next actions.
    #[must_use]
    pub fn invalid_move() -> Self {
        Self::new(ErrorCategory::Semantic, "invalid move")
    }

    /// The failure's category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_is_semantic() {
        let err = EngineError::invalid_move();
        assert_eq!(err.category(), ErrorCategory::Semantic);
        assert_eq!(err.to_string(), "invalid move");
    }

    #[test]
    fn test_category_round_trips_through_serde() {
        let json = serde_json::to_string(&ErrorCategory::NotFound).unwrap();
        let back: ErrorCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCategory::NotFound);
    }
}
