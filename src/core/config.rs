//! Configuration types.
//!
//! - `TurnMode`: How the next player is chosen
//! - `SessionConfig`: Turn mode and seed for one playthrough
//! - `RosterLimits`: Bounds enforced when collecting player names
//! - `StoreConfig`: Storage key layout and the default edition

use serde::{Deserialize, Serialize};

/// How turns rotate through the roster. Fixed for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnMode {
    /// Round-robin in roster order.
    #[default]
    Sequential,
    /// Shuffled bag: everyone once per cycle, in random order.
    Randomized,
}

/// Configuration for a game session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub turn_mode: TurnMode,

    /// Fixed seed for reproducible deals. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_turn_mode(mut self, mode: TurnMode) -> Self {
        self.turn_mode = mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Bounds on the roster.
///
/// Only built through [`Default`] and the `with_*` methods, so the player
/// cap never exceeds [`RosterLimits::MAX_SUPPORTED_PLAYERS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterLimits {
    max_players: usize,
    // Measured in characters, not bytes.
    max_name_len: usize,
}

impl RosterLimits {
    pub const DEFAULT_MAX_PLAYERS: usize = 20;
    pub const DEFAULT_MAX_NAME_LEN: usize = 20;

    /// Player ids are `u8`, and the turn rotator holds at most 255 players.
    pub const MAX_SUPPORTED_PLAYERS: usize = u8::MAX as usize;

    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(
            max <= Self::MAX_SUPPORTED_PLAYERS,
            "At most 255 players supported"
        );
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    #[must_use]
    pub const fn max_players(&self) -> usize {
        self.max_players
    }

    /// Longest accepted name, in characters.
    #[must_use]
    pub const fn max_name_len(&self) -> usize {
        self.max_name_len
    }
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            max_players: Self::DEFAULT_MAX_PLAYERS,
            max_name_len: Self::DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// Storage layout for the deck store.
///
/// Keys are `"{namespace}_edition"` for the selected edition and
/// `"{namespace}_deck_{edition_id}"` for each edition's deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub namespace: String,

    /// Edition used when nothing valid is persisted.
    pub default_edition: String,
}

impl StoreConfig {
    pub const DEFAULT_NAMESPACE: &'static str = "@walwalcards";
    pub const DEFAULT_EDITION: &'static str = "classic";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_default_edition(mut self, edition_id: impl Into<String>) -> Self {
        self.default_edition = edition_id.into();
        self
    }

    /// Key holding the last selected edition id.
    #[must_use]
    pub fn edition_key(&self) -> String {
        format!("{}_edition", self.namespace)
    }

    /// Key holding one edition's deck.
    #[must_use]
    pub fn deck_key(&self, edition_id: &str) -> String {
        format!("{}_deck_{}", self.namespace, edition_id)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: Self::DEFAULT_NAMESPACE.to_string(),
            default_edition: Self::DEFAULT_EDITION.to_string(),
        }
    }
}
