//! Cards and card drafts.
//!
//! A `Card` is an immutable value in a deck. A `CardDraft` is what a user
//! submits when creating or editing a card: every field except the id.
//! Drafts are normalized by [`CardDraft::validate`] before they reach a deck.

use serde::{Deserialize, Serialize};

use super::edition::TemplateCard;
use crate::error::CardError;

/// Unique identifier of a card within a deck.
///
/// Template cards get `"{edition_id}-{index}"`; user cards get a
/// time-based numeric id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the template card at `index` in an edition.
    #[must_use]
    pub fn template(edition_id: &str, index: usize) -> Self {
        Self(format!("{edition_id}-{index}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A prompt card.
///
/// Serialized as `{ "id", "type", "prompt", "emoji" }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Free-form category label ("Dare", "Shot", ...).
    #[serde(rename = "type")]
    pub card_type: String,

    /// Display text.
    pub prompt: String,

    /// Display icon.
    pub emoji: String,
}

impl Card {
    /// Build a card from a draft, assigning `id`.
    #[must_use]
    pub fn from_draft(id: CardId, draft: CardDraft) -> Self {
        Self {
            id,
            card_type: draft.card_type,
            prompt: draft.prompt,
            emoji: draft.emoji,
        }
    }

    /// Instantiate the template card at `index` of an edition.
    #[must_use]
    pub fn from_template(edition_id: &str, index: usize, template: &TemplateCard) -> Self {
        Self {
            id: CardId::template(edition_id, index),
            card_type: template.card_type.clone(),
            prompt: template.prompt.clone(),
            emoji: template.emoji.clone(),
        }
    }

    /// The card's fields without its id.
    #[must_use]
    pub fn draft(&self) -> CardDraft {
        CardDraft {
            card_type: self.card_type.clone(),
            prompt: self.prompt.clone(),
            emoji: self.emoji.clone(),
        }
    }
}

/// The user-editable fields of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDraft {
    pub card_type: String,
    pub prompt: String,
    pub emoji: String,
}

impl CardDraft {
    pub const DEFAULT_TYPE: &'static str = "Custom";
    pub const DEFAULT_EMOJI: &'static str = "🃏";

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

    /// A draft with only a prompt; type and emoji take their defaults.
    #[must_use]
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self::new("", prompt, "")
    }

    /// Trim every field and fill in defaults for a blank type or emoji.
    ///
    /// A blank prompt is rejected.
    ///
    /// ```
    /// use walwal_cards::cards::CardDraft;
    ///
    /// let draft = CardDraft::new(" ", " Sing a song ", "").validate().unwrap();
    /// assert_eq!(draft.card_type, "Custom");
    /// assert_eq!(draft.prompt, "Sing a song");
    /// assert_eq!(draft.emoji, "🃏");
    ///
    /// assert!(CardDraft::prompt("   ").validate().is_err());
    /// ```
    pub fn validate(self) -> Result<Self, CardError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(CardError::EmptyPrompt);
        }

        let card_type = match self.card_type.trim() {
            "" => Self::DEFAULT_TYPE,
            t => t,
        };
        let emoji = match self.emoji.trim() {
            "" => Self::DEFAULT_EMOJI,
            e => e,
        };

        Ok(Self {
            card_type: card_type.to_string(),
            prompt: prompt.to_string(),
            emoji: emoji.to_string(),
        })
    }
}
