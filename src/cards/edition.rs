//! Editions: named template sets of cards.
//!
//! An edition is static reference data. Its template cards are the default
//! content of any deck created for it.

use serde::{Deserialize, Serialize};

/// A card in an edition's template list. Has no id; ids are assigned when
/// the template is instantiated into a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCard {
    #[serde(rename = "type")]
    pub card_type: String,
    pub prompt: String,
    pub emoji: String,
}

impl TemplateCard {
    #[must_use]
    pub fn new(
        card_type: impl Into<String>,
        prompt: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            card_type: card_type.into(),
            prompt: prompt.into(),
            emoji: emoji.into(),
        }
    }
}

/// A game variant.
///
/// ## Example
///
/// ```
/// use walwal_cards::cards::{Edition, TemplateCard};
///
/// let edition = Edition::new("office", "Office Party")
///     .with_description("Keep it HR-friendly")
///     .with_emoji("💼")
///     .with_color("#3B82F6")
///     .with_card(TemplateCard::new("Dare", "Do your best boss impression", "🎭"));
///
/// assert_eq!(edition.cards.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    /// Stable unique identifier, also part of storage keys.
    pub id: String,
    pub name: String,
    pub description: String,
    pub emoji: String,
    /// Hex color, e.g. `"#F97316"`.
    pub color: String,
    pub cards: Vec<TemplateCard>,
}

impl Edition {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            emoji: String::new(),
            color: String::new(),
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_card(mut self, card: TemplateCard) -> Self {
        self.cards.push(card);
        self
    }

    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = TemplateCard>) -> Self {
        self.cards.extend(cards);
        self
    }
}
