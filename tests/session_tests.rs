//! Game session integration tests.
//!
//! These tests drive a session the way the app does: open the deck store,
//! collect a roster, start a session and tap through cards.

use std::collections::HashSet;

use walwal_cards::cards::{CardDraft, EditionCatalog};
use walwal_cards::core::{Roster, RosterBuilder, SessionConfig, StoreConfig, TurnMode};
use walwal_cards::error::RosterError;
use walwal_cards::session::GameSession;
use walwal_cards::storage::{DeckStore, MemoryStore};

fn store() -> DeckStore<MemoryStore> {
    DeckStore::open(MemoryStore::new(), EditionCatalog::builtin(), StoreConfig::default())
}

/// A full sequential game: card and turn move together.
#[test]
fn test_sequential_game() {
    let store = store();
    let roster = Roster::from_names(["Ana", "Ben", "Cy"]).unwrap();
    let mut session = GameSession::start(store.deck(), roster, &SessionConfig::new().with_seed(1));

    let mut players = vec![session.view().player.unwrap().to_string()];
    let mut prev_card = session.view().card.unwrap().id.clone();

    for deal in 2..=30u64 {
        session.reveal();
        assert!(session.next());

        let view = session.view();
        assert_eq!(view.deal_number, deal);
        assert!(!view.revealed);

        let card = view.card.unwrap();
        assert_ne!(card.id, prev_card);
        prev_card = card.id.clone();
        players.push(view.player.unwrap().to_string());
    }

    let expected: Vec<_> = ["Ana", "Ben", "Cy"].iter().cycle().take(30).map(|s| s.to_string()).collect();
    assert_eq!(players, expected);
}

/// Randomized turns: everyone plays once per round.
#[test]
fn test_randomized_game_rounds() {
    let names = ["Ana", "Ben", "Cy", "Dee"];
    let roster = Roster::from_names(names).unwrap();
    let config = SessionConfig::new()
        .with_turn_mode(TurnMode::Randomized)
        .with_seed(8);
    let mut session = GameSession::start(store().deck(), roster, &config);

    let mut players = vec![session.current_player().unwrap().to_string()];
    for _ in 1..(names.len() * 5) {
        session.next();
        players.push(session.current_player().unwrap().to_string());
    }

    for round in players.chunks(names.len()) {
        let round: HashSet<_> = round.iter().map(String::as_str).collect();
        assert_eq!(round, names.iter().copied().collect::<HashSet<_>>());
    }
    for pair in players.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

/// Every card in the deck shows once before any repeats.
#[test]
fn test_session_deals_whole_deck() {
    let store = store();
    let size = store.deck().len();
    let mut session = GameSession::start(store.deck(), Roster::empty(), &SessionConfig::new().with_seed(4));

    let mut seen = HashSet::new();
    seen.insert(session.current_card().unwrap().id.clone());
    for _ in 1..size {
        session.next();
        assert!(seen.insert(session.current_card().unwrap().id.clone()));
    }
    assert_eq!(seen.len(), size);
    assert_eq!(session.sequencer().epoch(), 0);
}

/// Cards added through the store appear in the next session only.
#[test]
fn test_session_uses_deck_snapshot() {
    let mut store = store();
    let before = GameSession::start(store.deck(), Roster::empty(), &SessionConfig::new().with_seed(2));

    let id = store.add_card(CardDraft::new("Dare", "Sing a song", "🎤")).unwrap();
    let after = GameSession::start(store.deck(), Roster::empty(), &SessionConfig::new().with_seed(2));

    assert!(!before.deck().contains(&id));
    assert!(after.deck().contains(&id));
    assert_eq!(after.sequencer().len(), before.sequencer().len() + 1);
}

/// An emptied deck gives an idle session that ignores taps.
#[test]
fn test_empty_deck_session() {
    let mut store = store();
    let ids: Vec<_> = store.deck().iter().map(|c| c.id.clone()).collect();
    for id in &ids {
        store.delete_card(id);
    }
    assert!(store.deck().is_empty());

    let roster = Roster::from_names(["Ana", "Ben"]).unwrap();
    let mut session = GameSession::start(store.deck(), roster, &SessionConfig::new().with_seed(1));

    assert!(session.is_idle());
    assert!(!session.next());
    assert!(session.reveal().is_none());
    assert_eq!(session.view().card, None);
    assert_eq!(session.current_player(), Some("Ana"));
}

/// Same seed, same game.
#[test]
fn test_seeded_sessions_replay() {
    let store = store();
    let roster = Roster::from_names(["Ana", "Ben", "Cy"]).unwrap();
    let config = SessionConfig::new()
        .with_turn_mode(TurnMode::Randomized)
        .with_seed(123);

    let mut a = GameSession::start(store.deck(), roster.clone(), &config);
    let mut b = GameSession::start(store.deck(), roster, &config);

    for _ in 0..40 {
        assert_eq!(a.view(), b.view());
        a.next();
        b.next();
    }
}

/// Roster input rejects bad names without changing the list.
#[test]
fn test_roster_boundary() {
    let mut builder = RosterBuilder::new();
    builder.add("Ana").unwrap();

    assert_eq!(builder.add("  "), Err(RosterError::EmptyName));
    assert_eq!(builder.add("ana"), Err(RosterError::DuplicateName));
    assert_eq!(builder.add("a name far too long to fit"), Err(RosterError::NameTooLong { max: 20 }));
    assert_eq!(builder.names(), &["Ana".to_string()]);

    for i in 1..20 {
        builder.add(&format!("Player {i}")).unwrap();
    }
    let err = builder.add("Extra").unwrap_err();
    assert_eq!(err.to_string(), "You can only add up to 20 players.");

    let roster = builder.build();
    let session = GameSession::start(store().deck(), roster, &SessionConfig::new().with_seed(0));
    assert_eq!(session.roster().len(), 20);
    assert_eq!(session.current_player(), Some("Ana"));
}

/// A single player keeps every turn.
#[test]
fn test_single_player() {
    for mode in [TurnMode::Sequential, TurnMode::Randomized] {
        let roster = Roster::from_names(["Solo"]).unwrap();
        let config = SessionConfig::new().with_turn_mode(mode).with_seed(6);
        let mut session = GameSession::start(store().deck(), roster, &config);

        for _ in 0..10 {
            assert_eq!(session.current_player(), Some("Solo"));
            session.next();
        }
    }
}

/// A roster arriving as JSON goes through the same checks as typed input.
#[test]
fn test_roster_from_json() {
    let roster: Roster = serde_json::from_str(r#"["Ana", " Ben "]"#).unwrap();
    let session = GameSession::start(store().deck(), roster, &SessionConfig::new().with_seed(3));
    assert_eq!(session.roster().len(), 2);
    assert_eq!(session.current_player(), Some("Ana"));

    for bad in [r#"["Ana", "ANA"]"#, r#"["Ana", "   "]"#] {
        assert!(serde_json::from_str::<Roster>(bad).is_err(), "{bad}");
    }

    let crowd: Vec<String> = (0..300).map(|i| format!("Guest {i}")).collect();
    let json = serde_json::to_string(&crowd).unwrap();
    assert!(serde_json::from_str::<Roster>(&json).is_err());
}
