//! The live, user-editable card list of one edition.
//!
//! Backed by an `im::Vector` so the store can hand out and persist full
//! snapshots with O(1) cloning. Card ids are unique within a deck.

use im::Vector;
use rustc_hash::FxHashSet;

use super::card::{Card, CardId};
use super::edition::Edition;

/// A deck of cards belonging to one edition. May be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    edition_id: String,
    cards: Vector<Card>,
}

impl Deck {
    /// An empty deck for an edition.
    #[must_use]
    pub fn empty(edition_id: impl Into<String>) -> Self {
        Self {
            edition_id: edition_id.into(),
            cards: Vector::new(),
        }
    }

    /// Fresh instantiation of an edition's template cards.
    ///
    /// Ids are `"{edition_id}-{index}"`, so this is a pure function of the
    /// edition.
    #[must_use]
    pub fn from_edition(edition: &Edition) -> Self {
        let cards = edition
            .cards
            .iter()
            .enumerate()
            .map(|(index, template)| Card::from_template(&edition.id, index, template))
            .collect();

        Self {
            edition_id: edition.id.clone(),
            cards,
        }
    }

    /// Build a deck from stored cards.
    ///
    /// Returns `None` if two cards share an id.
    #[must_use]
    pub fn from_cards(edition_id: impl Into<String>, cards: Vec<Card>) -> Option<Self> {
        let mut seen = FxHashSet::default();
        if !cards.iter().all(|card| seen.insert(card.id.clone())) {
            return None;
        }

        Some(Self {
            edition_id: edition_id.into(),
            cards: cards.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn edition_id(&self) -> &str {
        &self.edition_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position in deck order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Find a card by id.
    #[must_use]
    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    /// Iterate over cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The cards as a persistent vector (O(1) clone).
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    pub(crate) fn push_front(&mut self, card: Card) {
        debug_assert!(!self.contains(&card.id));
        self.cards.push_front(card);
    }

    pub(crate) fn replace(&mut self, index: usize, card: Card) {
        self.cards.set(index, card);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }
}
