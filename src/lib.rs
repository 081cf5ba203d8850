//! # walwal-cards
//!
//! Core of a party card game: a deck of prompt cards is dealt one at a time
//! while players take turns.
//!
//! ## Design Principles
//!
//! 1. **Explicit context**: The deck store, the catalog and each session are
//!    plain values owned by the application, not globals.
//!
//! 2. **Degrade, don't fail**: Storage failures are logged and the in-memory
//!    deck stays authoritative. Corrupt or unknown persisted data falls back
//!    to edition defaults.
//!
//! 3. **Fair randomness**: Unbiased shuffles, every card once per epoch,
//!    every player once per cycle, no back-to-back repeats.
//!
//! ## Modules
//!
//! - `core`: RNG, players and roster, configuration
//! - `cards`: Cards, editions, the edition catalog, decks
//! - `storage`: Key-value backends and the per-edition deck store
//! - `sequencer`: Shuffled card dealing
//! - `turns`: Sequential and randomized turn rotation
//! - `session`: One playthrough tying deck and turns together
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod sequencer;
pub mod session;
pub mod storage;
pub mod turns;

// Re-export commonly used types
pub use crate::core::{
    DealRng, PlayerId, Roster, RosterBuilder, RosterLimits, SessionConfig, StoreConfig, TurnMode,
};

pub use crate::cards::{Card, CardDraft, CardId, Deck, Edition, EditionCatalog, TemplateCard};

pub use crate::storage::{
    DeckChange, DeckStore, FileStore, KeyValueStore, MemoryStore, StorageOp,
};

pub use crate::sequencer::DeckSequencer;
pub use crate::turns::TurnRotator;
pub use crate::session::{GameSession, SessionView};

pub use crate::error::{CardError, DeckError, RosterError, StorageError};
