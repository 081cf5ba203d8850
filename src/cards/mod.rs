//! Card system: cards, editions, the edition catalog and decks.
//!
//! ## Key Types
//!
//! - `Card`: Immutable prompt card with an id unique within its deck
//! - `CardDraft`: User-submitted card fields, validated before storing
//! - `Edition`: Static template set of cards
//! - `EditionCatalog`: All editions, with a default
//! - `Deck`: The live card list of one edition

pub mod card;
pub mod catalog;
pub mod deck;
pub mod edition;

pub use card::{Card, CardDraft, CardId};
pub use catalog::EditionCatalog;
pub use deck::Deck;
pub use edition::{Edition, TemplateCard};
