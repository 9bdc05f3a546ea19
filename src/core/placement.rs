//! Card placement: the orientation bitmask and the placed-card pair.
//!
//! Orientation is a bitmask rather than a boolean so future placement
//! attributes (rotated, marked, ...) can be added without changing the
//! stored or transported shape. The only defined bit today is face-up.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Bitmask describing how a card sits on the board.
///
/// Ordering and equality compare the raw bits, which is what the canonical
/// move ordering requires.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Orientation(u64);

impl Orientation {
    /// No bits set: face-down, the default for freshly built cards.
    pub const FACE_DOWN: Orientation = Orientation(0);

    /// The face-up bit.
    pub const FACE_UP: Orientation = Orientation(1);

    /// Rebuild from raw bits (e.g. decoded from transport).
    #[must_use]
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw bitmask value.
    #[must_use]
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Whether the face-up bit is set.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        self.0 & Self::FACE_UP.0 != 0
    }

    /// This orientation with the face-up bit set.
    #[must_use]
    pub fn face_up(self) -> Self {
        Self(self.0 | Self::FACE_UP.0)
    }

    /// This orientation with the face-up bit cleared.
    #[must_use]
    pub fn face_down(self) -> Self {
        Self(self.0 & !Self::FACE_UP.0)
    }
}

/// A card together with its current orientation on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedCard {
    pub orientation: Orientation,
    pub card: Card,
}

impl PlacedCard {
    /// Place a card face-down.
    #[must_use]
    pub fn face_down(card: Card) -> Self {
        Self {
            orientation: Orientation::FACE_DOWN,
            card,
        }
    }

    /// Place a card face-up.
    #[must_use]
    pub fn face_up(card: Card) -> Self {
        Self {
            orientation: Orientation::FACE_UP,
            card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_face_up_bit() {
        let o = Orientation::default();
        assert!(!o.is_face_up());
        assert!(o.face_up().is_face_up());
        assert!(!o.face_up().face_down().is_face_up());
    }

    #[test]
    fn test_other_bits_survive_flips() {
        let o = Orientation::from_bits(0b100).face_up();
        assert_eq!(o.bits(), 0b101);
        assert_eq!(o.face_down().bits(), 0b100);
    }

    #[test]
    fn test_ordering_uses_raw_bits() {
        assert!(Orientation::FACE_DOWN < Orientation::FACE_UP);
        assert!(Orientation::from_bits(1) < Orientation::from_bits(2));
    }

    #[test]
    fn test_placed_card_constructors() {
        let card = Card::new(Suit::Hearts, Rank::Ace);
        assert!(!PlacedCard::face_down(card).orientation.is_face_up());
        assert!(PlacedCard::face_up(card).orientation.is_face_up());
    }
}
