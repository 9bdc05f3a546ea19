//! Saved-game shapes exchanged with the persistence layer.
//!
//! The engine never stores these itself: persistence supplies a
//! [`SavedGameDetail`] for a game id and durably applies accepted actions.
//! The compact binary codec here is for that boundary; session lifecycle
//! (creation, archival, deletion) is entirely the caller's concern.

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, History};
use crate::core::board::Board;
use crate::core::variant::Variant;
use crate::error::{EngineError, ErrorCategory};

/// A saved game with just enough state to list it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGameSummary {
    pub game_id: i64,
    pub score: i32,
}

/// A saved game with full state detail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGameDetail {
    pub game_id: i64,
    pub board: Board,
    pub history: History,
    pub possible_next_moves: Vec<Action>,
    pub variant: Variant,
}

impl SavedGameDetail {
    /// Serialize to the compact binary form used for storage.
    pub fn encode(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self)
            .map_err(|err| EngineError::new(ErrorCategory::Unknown, err.to_string()))
    }

    /// Deserialize from the compact binary form.
    ///
    /// Bytes that don't decode are malformed input, not engine state.
    pub fn decode(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes)
            .map_err(|err| EngineError::new(ErrorCategory::Malformed, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::DealRng;
    use crate::rules::{deal, next_actions};

    #[test]
    fn test_detail_codec_round_trip() {
        let mut rng = DealRng::new(0);
        let board = deal(&mut rng);
        let detail = SavedGameDetail {
            game_id: 7,
            possible_next_moves: next_actions(&board),
            board,
            history: History::new(),
            variant: Variant::with_deck_limit(3),
        };

        let bytes = detail.encode().unwrap();
        let decoded = SavedGameDetail::decode(&bytes).unwrap();
        assert_eq!(detail, decoded);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let err = SavedGameDetail::decode(&[0xff; 3]).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Malformed);
    }
}
