//! Randomized non-repeating card dealing.
//!
//! The `DeckSequencer` walks a random permutation of card indices. When the
//! permutation runs out it reshuffles, and if the new permutation would open
//! with the card just shown, that card is swapped with a random later
//! position. So within one epoch every card shows exactly once, and no card
//! ever shows twice in a row unless the deck has a single card.
//!
//! ```
//! use walwal_cards::core::DealRng;
//! use walwal_cards::sequencer::DeckSequencer;
//!
//! let mut seq = DeckSequencer::new(4, DealRng::new(1));
//! let mut seen = vec![seq.current().unwrap()];
//! for _ in 0..3 {
//!     seen.push(seq.advance().unwrap());
//! }
//! seen.sort();
//! assert_eq!(seen, vec![0, 1, 2, 3]);
//! ```

use tracing::trace;

use crate::core::DealRng;

/// Deals card indices `[0, N)` in shuffled epochs.
///
/// With `N == 0` the sequencer is idle: there is no current card and
/// advancing does nothing.
#[derive(Clone, Debug)]
pub struct DeckSequencer {
    order: Vec<usize>,
    cursor: usize,
    epoch: u64,
    rng: DealRng,
}

impl DeckSequencer {
    /// Create a sequencer and shuffle the first epoch.
    #[must_use]
    pub fn new(deck_size: usize, rng: DealRng) -> Self {
        let mut seq = Self {
            order: Vec::new(),
            cursor: 0,
            epoch: 0,
            rng,
        };
        seq.initialize(deck_size);
        seq
    }

    /// Start over with a fresh permutation of `[0, deck_size)`.
    pub fn initialize(&mut self, deck_size: usize) {
        self.order = self.rng.permutation(deck_size);
        self.cursor = 0;
        self.epoch = 0;
    }

    /// Index of the card currently showing.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// Move to the next card, reshuffling after the last one.
    ///
    /// Returns the new current index, or `None` when idle.
    pub fn advance(&mut self) -> Option<usize> {
        let n = self.order.len();
        if n == 0 {
            return None;
        }

        if self.cursor + 1 < n {
            self.cursor += 1;
        } else {
            self.reshuffle();
        }
        self.current()
    }

    fn reshuffle(&mut self) {
        let n = self.order.len();
        let last = self.order[n - 1];
        let mut next = self.rng.permutation(n);

        // A single card has nothing to swap with.
        if n > 1 && next[0] == last {
            let swap = 1 + self.rng.below(n - 1);
            next.swap(0, swap);
            trace!(card = last, swap, "broke repeat across reshuffle");
        }

        self.order = next;
        self.cursor = 0;
        self.epoch += 1;
        trace!(epoch = self.epoch, cards = n, "reshuffled deck");
    }

    /// Number of cards being dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when there is no card to deal.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.order.is_empty()
    }

    /// Completed reshuffles since initialization.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Position of the current card within the epoch.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cards left to deal in this epoch after the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor + 1)
    }

    /// The current epoch's permutation.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
