//! Game session: the composition point for one playthrough.
//!
//! A `GameSession` snapshots the deck, deals it through a [`DeckSequencer`]
//! and, when players were entered, rotates turns with a [`TurnRotator`].
//! `next` moves the card and the turn together; an idle session (empty deck)
//! moves neither.
//!
//! ## Example
//!
//! ```
//! use walwal_cards::cards::{Deck, EditionCatalog};
//! use walwal_cards::core::{Roster, SessionConfig};
//! use walwal_cards::session::GameSession;
//!
//! let deck = Deck::from_edition(EditionCatalog::builtin().default_edition());
//! let roster = Roster::from_names(["Ana", "Ben"]).unwrap();
//! let mut session = GameSession::start(&deck, roster, &SessionConfig::new().with_seed(3));
//!
//! assert_eq!(session.view().player, Some("Ana"));
//! assert!(session.reveal().is_some());
//!
//! assert!(session.next());
//! let view = session.view();
//! assert_eq!(view.player, Some("Ben"));
//! assert!(!view.revealed);
//! ```

use tracing::debug;

use crate::cards::{Card, Deck};
use crate::core::{DealRng, PlayerId, Roster, SessionConfig, TurnMode};
use crate::sequencer::DeckSequencer;
use crate::turns::TurnRotator;

/// What the presentation layer renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionView<'a> {
    /// `None` when the deck is empty.
    pub card: Option<&'a Card>,
    /// `None` when no players were entered.
    pub player: Option<&'a str>,
    /// Whether the card face is showing.
    pub revealed: bool,
    /// 1-based count of cards dealt, 0 when idle.
    pub deal_number: u64,
}

/// One playthrough from start to exit.
#[derive(Clone, Debug)]
pub struct GameSession {
    deck: Deck,
    roster: Roster,
    sequencer: DeckSequencer,
    rotator: Option<TurnRotator>,
    revealed: bool,
    deal_number: u64,
}

impl GameSession {
    /// Start a session over a snapshot of `deck`.
    ///
    /// Later edits to the deck do not affect a running session.
    #[must_use]
    pub fn start(deck: &Deck, roster: Roster, config: &SessionConfig) -> Self {
        let rng = config.seed.map_or_else(DealRng::from_entropy, DealRng::new);
        let sequencer = DeckSequencer::new(deck.len(), rng.for_context("deck"));

        let rotator = (!roster.is_empty()).then(|| {
            let mut rotator =
                TurnRotator::new(roster.len(), config.turn_mode, rng.for_context("turns"));
            // Randomized rotators seat the opening player from the bag.
            if rotator.current().is_none() {
                rotator.advance();
            }
            rotator
        });

        debug!(
            edition = %deck.edition_id(),
            cards = deck.len(),
            players = roster.len(),
            mode = ?config.turn_mode,
            "started session"
        );

        Self {
            deck: deck.clone(),
            roster,
            sequencer,
            rotator,
            revealed: false,
            deal_number: u64::from(!deck.is_empty()),
        }
    }

    /// Flip the current card face up. Idempotent.
    ///
    /// Returns `None` when there is no card to show.
    pub fn reveal(&mut self) -> Option<&Card> {
        if self.sequencer.is_idle() {
            return None;
        }
        self.revealed = true;
        self.current_card()
    }

    /// Deal the next card and pass the turn.
    ///
    /// Returns `false`, changing nothing, when the deck is empty.
    pub fn next(&mut self) -> bool {
        if self.sequencer.advance().is_none() {
            return false;
        }
        if let Some(rotator) = &mut self.rotator {
            rotator.advance();
        }

        self.revealed = false;
        self.deal_number += 1;
        debug!(
            deal = self.deal_number,
            card = ?self.sequencer.current(),
            player = ?self.current_player_id(),
            "advanced session"
        );
        true
    }

    /// The composite state for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            card: self.current_card(),
            player: self.current_player(),
            revealed: self.revealed,
            deal_number: self.deal_number,
        }
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.sequencer.current().and_then(|index| self.deck.get(index))
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.rotator.as_ref().and_then(TurnRotator::current)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&str> {
        self.current_player_id()
            .and_then(|player| self.roster.name(player))
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True when the deck is empty and nothing can be dealt.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.sequencer.is_idle()
    }

    /// Whether turns are being tracked.
    #[must_use]
    pub fn has_players(&self) -> bool {
        self.rotator.is_some()
    }

    #[must_use]
    pub fn turn_mode(&self) -> Option<TurnMode> {
        self.rotator.as_ref().map(TurnRotator::mode)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn sequencer(&self) -> &DeckSequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn rotator(&self) -> Option<&TurnRotator> {
        self.rotator.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Edition, TemplateCard};

    fn deck(n: usize) -> Deck {
        let edition = Edition::new("test", "Test").with_cards(
            (0..n).map(|i| TemplateCard::new("Dare", format!("Card {i}"), "🃏")),
        );
        Deck::from_edition(&edition)
    }

    fn config() -> SessionConfig {
        SessionConfig::new().with_seed(11)
    }

    #[test]
    fn test_idle_session() {
        let mut session =
            GameSession::start(&deck(0), Roster::from_names(["A", "B"]).unwrap(), &config());

        assert!(session.is_idle());
        assert!(session.reveal().is_none());
        assert!(!session.next());

        let view = session.view();
        assert_eq!(view.card, None);
        assert_eq!(view.deal_number, 0);
        // The turn did not move either.
        assert_eq!(view.player, Some("A"));
    }

    #[test]
    fn test_no_players() {
        let mut session = GameSession::start(&deck(3), Roster::empty(), &config());

        assert!(!session.has_players());
        assert_eq!(session.turn_mode(), None);
        assert!(session.next());
        assert_eq!(session.view().player, None);
        assert!(session.view().card.is_some());
    }

    #[test]
    fn test_reveal_then_next_hides() {
        let mut session = GameSession::start(&deck(3), Roster::empty(), &config());

        let first = session.current_card().cloned();
        assert_eq!(session.reveal().cloned(), first);
        assert_eq!(session.reveal().cloned(), first);
        assert!(session.is_revealed());

        session.next();
        assert!(!session.is_revealed());
        assert_eq!(session.view().deal_number, 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let source = deck(2);
        let session = GameSession::start(&source, Roster::empty(), &config());

        assert_eq!(session.deck(), &source);
        assert_eq!(session.sequencer().len(), 2);
    }

    #[test]
    fn test_randomized_seats_opening_player() {
        let roster = Roster::from_names(["A", "B", "C"]).unwrap();
        let session = GameSession::start(
            &deck(4),
            roster,
            &config().with_turn_mode(TurnMode::Randomized),
        );

        assert!(session.current_player().is_some());
        assert_eq!(session.rotator().map(|r| r.waiting().count()), Some(2));
    }
}
