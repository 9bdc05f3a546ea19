//! Game-rule parameters.

use serde::{Deserialize, Serialize};

/// Rule parameters for a game.
///
/// Currently a single knob: how many times the stock may be exhausted and
/// recycled from the talon. Zero means unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// Maximum number of deck cycles; 0 = unlimited.
    pub max_times_through_deck: u32,
}

impl Variant {
    /// A variant with no deck-cycle limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// A variant limiting the number of deck cycles.
    #[must_use]
    pub fn with_deck_limit(max_times_through_deck: u32) -> Self {
        Self {
            max_times_through_deck,
        }
    }

    /// Whether play may continue after `completed` full deck cycles.
    #[must_use]
    pub fn allows_another_pass(&self, completed: u32) -> bool {
        self.max_times_through_deck == 0 || completed < self.max_times_through_deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_unlimited() {
        let variant = Variant::unlimited();
        assert!(variant.allows_another_pass(0));
        assert!(variant.allows_another_pass(1_000));
    }

    #[test]
    fn test_limit_is_inclusive_of_completed_cycles() {
        let variant = Variant::with_deck_limit(2);
        assert!(variant.allows_another_pass(0));
        assert!(variant.allows_another_pass(1));
        assert!(!variant.allows_another_pass(2));
        assert!(!variant.allows_another_pass(3));
    }
}
