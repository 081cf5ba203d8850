//! Seedable random number generation for dealing and turn order.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Context streams**: Independent sequences for the deck and the turn bag
//! - **Unbiased shuffle**: Fisher–Yates from the last index down to 1
//!
//! ```
//! use walwal_cards::core::DealRng;
//!
//! let rng = DealRng::new(7);
//! let mut deck = rng.for_context("deck");
//! let mut turns = rng.for_context("turns");
//!
//! let order = deck.permutation(5);
//! let mut sorted = order.clone();
//! sorted.sort();
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
//!
//! // Drawing from one stream never shifts the other.
//! let mut turns_again = DealRng::new(7).for_context("turns");
//! assert_eq!(turns.below(100), turns_again.below(100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG used by the sequencer and the turn rotator.
///
/// Uses ChaCha8 for speed; quality is far beyond what a party game needs.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `[0, upper)`.
    ///
    /// Panics if `upper` is zero.
    pub fn below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Shuffle a slice in place.
    ///
    /// `SliceRandom::shuffle` is Fisher–Yates: it walks from the last index
    /// down to 1 and swaps each position with a uniform index in `[0, i]`,
    /// so all `n!` orders are equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// A uniformly random permutation of `[0, n)`.
    #[must_use]
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        self.shuffle(&mut order);
        order
    }
}
