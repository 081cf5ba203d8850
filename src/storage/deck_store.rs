//! Durable CRUD over the active edition's deck.
//!
//! The `DeckStore` owns the key-value backend, the edition catalog and the
//! active deck. Every mutation updates the in-memory deck first and then
//! writes the full deck snapshot, so a later write always carries every
//! earlier change. Storage failures are logged and recorded, never returned:
//! the in-memory deck stays authoritative for the life of the process.
//!
//! ## Usage
//!
//! ```
//! use walwal_cards::cards::{CardDraft, EditionCatalog};
//! use walwal_cards::core::StoreConfig;
//! use walwal_cards::storage::{DeckStore, MemoryStore};
//!
//! let mut store = DeckStore::open(MemoryStore::new(), EditionCatalog::builtin(), StoreConfig::default());
//! let before = store.deck().len();
//!
//! let id = store.add_card(CardDraft::new("Dare", "Sing a song", "🎤")).unwrap();
//! assert_eq!(store.deck().len(), before + 1);
//! assert_eq!(store.deck().get(0).map(|c| &c.id), Some(&id));
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use super::kv::KeyValueStore;
use crate::cards::{Card, CardDraft, CardId, Deck, Edition, EditionCatalog};
use crate::core::StoreConfig;
use crate::error::{DeckError, StorageError};

/// Notification sent to subscribers after the active deck changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckChange {
    /// The active edition's deck was (re)loaded, e.g. after a switch.
    Loaded { edition_id: String },
    Added(CardId),
    Updated(CardId),
    Deleted(CardId),
    /// The deck was replaced by the edition's template cards.
    Reset { edition_id: String },
}

type Listener = Box<dyn FnMut(&DeckChange)>;

/// The storage operation behind a recorded failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageOp {
    ReadSelection,
    SaveSelection,
    LoadDeck,
    SaveDeck,
}

impl StorageOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageOp::ReadSelection => "read edition selection",
            StorageOp::SaveSelection => "save edition selection",
            StorageOp::LoadDeck => "load deck",
            StorageOp::SaveDeck => "save deck",
        }
    }
}

impl std::fmt::Display for StorageOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hands out time-based card ids that never repeat within a deck.
///
/// Ids are milliseconds since the epoch, bumped past the last id issued and
/// past any id already in the deck.
#[derive(Clone, Debug, Default)]
struct CardIdSource {
    last: i64,
}

impl CardIdSource {
    fn next(&mut self, deck: &Deck) -> CardId {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        while deck.contains(&CardId::new(candidate.to_string())) {
            candidate += 1;
        }
        self.last = candidate;
        CardId::new(candidate.to_string())
    }
}

/// Persistent deck storage scoped per edition.
pub struct DeckStore<S> {
    kv: S,
    catalog: EditionCatalog,
    config: StoreConfig,
    edition_id: String,
    deck: Deck,
    ids: CardIdSource,
    revision: u64,
    last_error: Option<(StorageOp, StorageError)>,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> DeckStore<S> {
    /// Open the store: restore the last selected edition and load its deck.
    ///
    /// A missing, unreadable or unknown selection falls back to the default
    /// edition.
    pub fn open(kv: S, catalog: EditionCatalog, config: StoreConfig) -> Self {
        let fallback = if catalog.contains(&config.default_edition) {
            config.default_edition.clone()
        } else {
            warn!(
                edition = %config.default_edition,
                "configured default edition not in catalog, using catalog default"
            );
            catalog.default_edition().id.clone()
        };

        let mut store = Self {
            kv,
            catalog,
            config,
            edition_id: fallback.clone(),
            deck: Deck::empty(fallback.as_str()),
            ids: CardIdSource::default(),
            revision: 0,
            last_error: None,
            listeners: Vec::new(),
        };

        let key = store.config.edition_key();
        match store.kv.get(&key) {
            Ok(Some(saved)) if store.catalog.contains(&saved) => store.edition_id = saved,
            Ok(Some(saved)) => {
                warn!(edition = %saved, "persisted edition unknown, using {}", fallback);
            }
            Ok(None) => {}
            Err(err) => store.record_error(StorageOp::ReadSelection, err),
        }

        let edition_id = store.edition_id.clone();
        store.deck = store.load(&edition_id);
        store
    }

    /// Retrieve the persisted deck for an edition.
    ///
    /// An edition with no stored deck, or with a malformed one, gets its
    /// template cards, which are persisted before returning. If storage
    /// cannot be read the returned deck is empty and nothing is written.
    /// Unknown ids resolve to the default edition. Does not change the
    /// active edition.
    pub fn load(&mut self, edition_id: &str) -> Deck {
        let edition_id = self.resolve_id(edition_id);
        let key = self.config.deck_key(&edition_id);

        let stored = self.kv.get(&key);
        if stored.is_ok() {
            self.clear_error(StorageOp::LoadDeck);
        }

        match stored {
            Ok(Some(json)) => match parse_deck(&edition_id, &json) {
                Some(deck) => {
                    debug!(edition = %edition_id, cards = deck.len(), "loaded deck");
                    return deck;
                }
                None => warn!(edition = %edition_id, "persisted deck is malformed, restoring defaults"),
            },
            Ok(None) => {}
            Err(err) => {
                self.record_error(StorageOp::LoadDeck, err);
                return Deck::empty(edition_id);
            }
        }

        let deck = Deck::from_edition(self.catalog.resolve(&edition_id));
        info!(edition = %edition_id, cards = deck.len(), "initialized deck from edition");
        self.write_deck(&deck);
        deck
    }

    /// Validate a draft and prepend it to the deck with a fresh id.
    pub fn add_card(&mut self, draft: CardDraft) -> Result<CardId, DeckError> {
        let draft = draft.validate()?;
        let id = self.ids.next(&self.deck);

        self.deck.push_front(Card::from_draft(id.clone(), draft));
        debug!(edition = %self.edition_id, card = %id, "added card");

        self.persist_active();
        self.notify(DeckChange::Added(id.clone()));
        Ok(id)
    }

    /// Replace a card's fields, keeping its id and position.
    pub fn update_card(&mut self, id: &CardId, draft: CardDraft) -> Result<(), DeckError> {
        let draft = draft.validate()?;
        let index = self
            .deck
            .position(id)
            .ok_or_else(|| DeckError::CardNotFound(id.clone()))?;

        self.deck.replace(index, Card::from_draft(id.clone(), draft));
        debug!(edition = %self.edition_id, card = %id, "updated card");

        self.persist_active();
        self.notify(DeckChange::Updated(id.clone()));
        Ok(())
    }

    /// Remove a card. Returns `false`, changing nothing, if it is absent.
    pub fn delete_card(&mut self, id: &CardId) -> bool {
        let Some(index) = self.deck.position(id) else {
            return false;
        };

        self.deck.remove(index);
        debug!(edition = %self.edition_id, card = %id, "deleted card");

        self.persist_active();
        self.notify(DeckChange::Deleted(id.clone()));
        true
    }

    /// Discard all customization of the active edition's deck.
    pub fn reset_deck(&mut self) {
        self.deck = Deck::from_edition(self.edition());
        info!(edition = %self.edition_id, cards = self.deck.len(), "reset deck");

        self.persist_active();
        self.notify(DeckChange::Reset {
            edition_id: self.edition_id.clone(),
        });
    }

    /// Make another edition active, remember the choice and load its deck.
    ///
    /// Other editions' stored decks are left untouched.
    pub fn switch_edition(&mut self, edition_id: &str) -> Result<(), DeckError> {
        if !self.catalog.contains(edition_id) {
            return Err(DeckError::UnknownEdition(edition_id.to_string()));
        }

        let key = self.config.edition_key();
        match self.kv.set(&key, edition_id) {
            Ok(()) => self.clear_error(StorageOp::SaveSelection),
            Err(err) => self.record_error(StorageOp::SaveSelection, err),
        }

        self.edition_id = edition_id.to_string();
        self.deck = self.load(edition_id);
        info!(edition = %edition_id, cards = self.deck.len(), "switched edition");

        self.notify(DeckChange::Loaded {
            edition_id: edition_id.to_string(),
        });
        Ok(())
    }

    /// Register a listener called after every change to the active deck.
    pub fn subscribe(&mut self, listener: impl FnMut(&DeckChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist_active(&mut self) {
        let snapshot = self.deck.clone();
        self.write_deck(&snapshot);
    }

    fn write_deck(&mut self, deck: &Deck) {
        let key = self.config.deck_key(deck.edition_id());
        let result = serde_json::to_string(deck.cards())
            .map_err(StorageError::from)
            .and_then(|json| self.kv.set(&key, &json));

        match result {
            Ok(()) => self.clear_error(StorageOp::SaveDeck),
            Err(err) => self.record_error(StorageOp::SaveDeck, err),
        }
    }

    fn resolve_id(&self, edition_id: &str) -> String {
        if !self.catalog.contains(edition_id) {
            warn!(edition = %edition_id, "unknown edition, using default");
        }
        self.catalog.resolve(edition_id).id.clone()
    }
}

impl<S> DeckStore<S> {
    /// The active deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The active edition.
    #[must_use]
    pub fn edition(&self) -> &Edition {
        self.catalog.resolve(&self.edition_id)
    }

    #[must_use]
    pub fn catalog(&self) -> &EditionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Incremented on every change to the active deck.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The storage failure from the most recent failed operation.
    ///
    /// Cleared only when the same kind of operation later succeeds: a good
    /// deck write clears a failed deck write but leaves a failed selection
    /// write in place.
    #[must_use]
    pub fn last_storage_error(&self) -> Option<&StorageError> {
        self.last_error.as_ref().map(|(_, err)| err)
    }

    /// Like [`last_storage_error`](Self::last_storage_error), with the
    /// operation that failed.
    #[must_use]
    pub fn last_storage_failure(&self) -> Option<(StorageOp, &StorageError)> {
        self.last_error.as_ref().map(|(op, err)| (*op, err))
    }

    /// The key-value backend.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.kv
    }

    /// Give back the key-value backend.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.kv
    }

    fn record_error(&mut self, op: StorageOp, err: StorageError) {
        warn!(edition = %self.edition_id, error = %err, "failed to {}", op);
        self.last_error = Some((op, err));
    }

    fn clear_error(&mut self, op: StorageOp) {
        if matches!(self.last_error, Some((failed, _)) if failed == op) {
            self.last_error = None;
        }
    }

    fn notify(&mut self, change: DeckChange) {
        self.revision += 1;
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

impl<S> std::fmt::Debug for DeckStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckStore")
            .field("edition_id", &self.edition_id)
            .field("cards", &self.deck.len())
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Parse a stored deck. Malformed JSON or duplicate ids count as no data.
fn parse_deck(edition_id: &str, json: &str) -> Option<Deck> {
    let cards: Vec<Card> = serde_json::from_str(json).ok()?;
    Deck::from_cards(edition_id, cards)
}
