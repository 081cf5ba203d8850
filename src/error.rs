//! Error types.
//!
//! Storage failures are never fatal: the deck store logs and records them
//! while the in-memory deck stays authoritative. The other errors are
//! rejections at an input boundary and carry the notice shown to the user.

use thiserror::Error;

use crate::cards::CardId;

/// Failure reported by a [`KeyValueStore`](crate::storage::KeyValueStore).
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize deck: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A card draft that cannot be stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("A card needs a prompt.")]
    EmptyPrompt,
}

/// A rejected deck mutation or edition change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error(transparent)]
    InvalidCard(#[from] CardError),

    #[error("no card with id {0} in this deck")]
    CardNotFound(CardId),

    #[error("unknown edition: {0}")]
    UnknownEdition(String),
}

/// A rejected roster entry. The message is the user-facing notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Please enter a player name.")]
    EmptyName,

    #[error("Names can be at most {max} characters.")]
    NameTooLong { max: usize },

    #[error("This player is already in the list.")]
    DuplicateName,

    #[error("You can only add up to {max} players.")]
    RosterFull { max: usize },
}
