//! Persistence: the key-value seam, its backends, and the deck store.
//!
//! ## Key Types
//!
//! - `KeyValueStore`: `get`/`set` over string keys, fallible
//! - `MemoryStore`: Process-lifetime backend
//! - `FileStore`: One file per key under a directory
//! - `DeckStore`: Per-edition deck CRUD with default population

pub mod deck_store;
pub mod file;
pub mod kv;

pub use deck_store::{DeckChange, DeckStore, StorageOp};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
