//! Core types: identifiers, players, games, moves, RNG, settings, errors.
//!
//! This module holds the state model of a duel. Combat itself is decided by
//! `rules`, and persistence by `storage`.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Move;
pub use config::{ConfigError, Settings};
pub use entity::{GameId, PlayerId, Secret};
pub use error::DuelError;
pub use player::{Player, PlayerStatus, MAX_NAME_LENGTH};
pub use rng::DeckRng;
pub use state::{Game, GameStatus};
