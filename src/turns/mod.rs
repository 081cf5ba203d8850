//! Turn rotation.
//!
//! - `Sequential`: `next = (current + 1) mod P`, starting with player 0.
//! - `Randomized`: a shuffled bag of every player per cycle. The rotator
//!   starts with a full bag and no current player; each `advance` draws the
//!   front of the bag. An empty bag is refilled with a new permutation, and
//!   if that permutation opens with the player who just went, that player
//!   is moved to the back. Every P draws form one full cycle and nobody goes
//!   twice in a row when `P > 1`.

use std::collections::VecDeque;

use tracing::trace;

use crate::core::{DealRng, PlayerId, RosterLimits, TurnMode};

/// Decides whose turn it is.
#[derive(Clone, Debug)]
pub struct TurnRotator {
    mode: TurnMode,
    player_count: usize,
    current: Option<PlayerId>,
    bag: VecDeque<PlayerId>,
    cycle: u64,
    rng: DealRng,
}

impl TurnRotator {
    /// Create a rotator for `player_count` players.
    ///
    /// Panics if `player_count` is zero: a session without players runs
    /// without a rotator.
    #[must_use]
    pub fn new(player_count: usize, mode: TurnMode, rng: DealRng) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= RosterLimits::MAX_SUPPORTED_PLAYERS,
            "At most 255 players supported"
        );

        let mut rotator = Self {
            mode,
            player_count,
            current: None,
            bag: VecDeque::new(),
            cycle: 0,
            rng,
        };

        match mode {
            TurnMode::Sequential => rotator.current = Some(PlayerId::new(0)),
            TurnMode::Randomized => rotator.bag = rotator.shuffled_players(),
        }
        rotator
    }

    /// Player whose turn it is, if any turn has been taken yet.
    ///
    /// Sequential rotators start on player 0; randomized ones start empty
    /// until the first `advance`.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.current
    }

    /// Hand the turn to the next player and return them.
    pub fn advance(&mut self) -> PlayerId {
        let next = match self.mode {
            TurnMode::Sequential => {
                let current = self.current.map_or(0, PlayerId::index);
                PlayerId::new(((current + 1) % self.player_count) as u8)
            }
            TurnMode::Randomized => self.draw(),
        };

        self.current = Some(next);
        next
    }

    fn draw(&mut self) -> PlayerId {
        if self.bag.is_empty() {
            self.refill();
        }
        match self.bag.pop_front() {
            Some(player) => player,
            // refill always leaves player_count >= 1 entries
            None => unreachable!("turn bag empty after refill"),
        }
    }

    fn refill(&mut self) {
        let mut bag = self.shuffled_players();

        if self.player_count > 1 && bag.front() == self.current.as_ref() {
            bag.rotate_left(1);
            trace!(player = ?self.current, "moved last player to back of new cycle");
        }

        self.bag = bag;
        self.cycle += 1;
        trace!(cycle = self.cycle, players = self.player_count, "refilled turn bag");
    }

    fn shuffled_players(&mut self) -> VecDeque<PlayerId> {
        self.rng
            .permutation(self.player_count)
            .into_iter()
            .map(|i| PlayerId::new(i as u8))
            .collect()
    }

    #[must_use]
    pub fn mode(&self) -> TurnMode {
        self.mode
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Completed bag refills. Always 0 in sequential mode.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Players still waiting for a turn this cycle (randomized mode).
    pub fn waiting(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.bag.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_wraps() {
        let mut rotator = TurnRotator::new(3, TurnMode::Sequential, DealRng::new(0));
        assert_eq!(rotator.current(), Some(PlayerId::new(0)));

        let turns: Vec<_> = (0..6).map(|_| rotator.advance().index()).collect();
        assert_eq!(turns, vec![1, 2, 0, 1, 2, 0]);
        assert_eq!(rotator.cycle(), 0);
    }

    #[test]
    fn test_single_player_always_returns_same() {
        for mode in [TurnMode::Sequential, TurnMode::Randomized] {
            let mut rotator = TurnRotator::new(1, mode, DealRng::new(5));
            for _ in 0..10 {
                assert_eq!(rotator.advance(), PlayerId::new(0));
            }
        }
    }

    #[test]
    fn test_randomized_starts_with_full_bag() {
        let rotator = TurnRotator::new(4, TurnMode::Randomized, DealRng::new(8));

        assert_eq!(rotator.current(), None);
        let mut waiting: Vec<_> = rotator.waiting().map(PlayerId::index).collect();
        waiting.sort_unstable();
        assert_eq!(waiting, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_randomized_cycles() {
        let mut rotator = TurnRotator::new(5, TurnMode::Randomized, DealRng::new(21));

        for cycle in 0..20 {
            let mut turns: Vec<_> = (0..5).map(|_| rotator.advance().index()).collect();
            turns.sort_unstable();
            assert_eq!(turns, vec![0, 1, 2, 3, 4], "cycle {cycle}");
        }
    }

    #[test]
    fn test_randomized_two_players_alternate() {
        let mut rotator = TurnRotator::new(2, TurnMode::Randomized, DealRng::new(13));
        let mut prev = rotator.advance();

        for _ in 0..50 {
            let next = rotator.advance();
            assert_ne!(next, prev);
            prev = next;
        }
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players_panics() {
        let _ = TurnRotator::new(0, TurnMode::Sequential, DealRng::new(0));
    }
}
