//! Deterministic shuffle source for dealing.
//!
//! The dealer never reads process-global random state: callers construct a
//! [`DealRng`] and pass it in, so identical seeds produce byte-identical
//! deals. Advancing the source is a mutation, so each concurrent
//! "start game" request gets its own instance.
//!
//! The state is serializable in O(1) via the ChaCha word position, which
//! lets a service persist the source alongside the game it seeded.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Caller-owned deterministic randomness source for the dealer.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place with an unbiased Fisher–Yates permutation.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Capture the current state for persistence.
    #[must_use]
    pub fn state(&self) -> DealRngState {
        DealRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore a source from a captured state.
    #[must_use]
    pub fn from_state(state: &DealRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable [`DealRng`] state.
///
/// The word position captures how far the stream has advanced, so restoring
/// is O(1) no matter how much randomness has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha word position (128-bit counter).
    pub word_pos: u128,
}
