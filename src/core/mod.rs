//! Core types: RNG, players and roster, configuration.
//!
//! Everything here is independent of cards and storage.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{RosterLimits, SessionConfig, StoreConfig, TurnMode};
pub use player::{PlayerId, Roster, RosterBuilder};
pub use rng::DealRng;
