//! Players and the session roster.
//!
//! ## PlayerId
//!
//! Index of a player in the roster, 0-based.
//!
//! ## Roster
//!
//! The ordered, immutable list of player names for one session. Built through
//! [`RosterBuilder`], which enforces the input rules: names are trimmed and
//! non-empty, unique ignoring case, and bounded in count and length.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::config::RosterLimits;
use crate::error::RosterError;

/// Player identifier: the player's position in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use walwal_cards::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Immutable list of player names for a session.
///
/// May be empty, in which case the session runs without turns. Serializes as
/// a plain array of names; deserializing runs the same checks as
/// [`Roster::from_names`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// A roster with no players.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a roster from names with the default limits.
    ///
    /// Stops at the first rejected name.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = RosterBuilder::new();
        for name in names {
            builder.add(name.as_ref())?;
        }
        Ok(builder.build())
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a player, if the id is in range.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    /// Iterate over (PlayerId, name) pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (PlayerId(i as u8), name.as_str()))
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = RosterError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

impl Index<PlayerId> for Roster {
    type Output = str;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.names[player.index()]
    }
}

/// Collects player names before a session starts.
///
/// Every rejection leaves the pending list untouched.
///
/// ```
/// use walwal_cards::core::RosterBuilder;
/// use walwal_cards::error::RosterError;
///
/// let mut builder = RosterBuilder::new();
/// builder.add("  Ana ").unwrap();
/// assert_eq!(builder.add("ANA"), Err(RosterError::DuplicateName));
///
/// let roster = builder.build();
/// assert_eq!(roster.len(), 1);
/// assert_eq!(&roster[walwal_cards::core::PlayerId::new(0)], "Ana");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RosterBuilder {
    limits: RosterLimits,
    names: Vec<String>,
    // Lowercased names for the duplicate check.
    seen: FxHashSet<String>,
}

impl RosterBuilder {
    /// Create a builder with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom limits.
    #[must_use]
    pub fn with_limits(limits: RosterLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Add a player, returning the new player's id.
    pub fn add(&mut self, name: &str) -> Result<PlayerId, RosterError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let full = RosterError::RosterFull {
            max: self.limits.max_players(),
        };
        if self.names.len() >= self.limits.max_players() {
            return Err(full);
        }
        let id = u8::try_from(self.names.len()).map_err(|_| full)?;
        if trimmed.chars().count() > self.limits.max_name_len() {
            return Err(RosterError::NameTooLong {
                max: self.limits.max_name_len(),
            });
        }

        let key = trimmed.to_lowercase();
        if self.seen.contains(&key) {
            return Err(RosterError::DuplicateName);
        }

        self.seen.insert(key);
        self.names.push(trimmed.to_string());
        Ok(PlayerId(id))
    }

    /// Remove the player at `index`, returning the name.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() {
            return None;
        }
        let name = self.names.remove(index);
        self.seen.remove(&name.to_lowercase());
        Some(name)
    }

    /// Names added so far.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Freeze the roster.
    #[must_use]
    pub fn build(self) -> Roster {
        Roster { names: self.names }
    }
}
