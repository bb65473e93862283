//! # stack-duel
//!
//! Rules engine and persistence layer for a two-or-more player card duel.
//! Each player holds 25 cards in five face-down stacks; a turn is one attack
//! of a top card against an opponent's top card, decided by a fixed
//! precedence ladder.
//!
//! ## Design Principles
//!
//! 1. **Pure resolution**: combat is a total function of two card kinds, with
//!    no state and no side effects.
//!
//! 2. **Validate at the edges**: players, decks, and games check their own
//!    invariants, and every rejection is a typed `DuelError`.
//!
//! 3. **Swappable storage**: one `Driver` trait, an in-memory driver for
//!    tests and single-process use, and a Redis driver for shared state.
//!
//! ## Modules
//!
//! - `cards`: Card kinds, the catalog, and decks
//! - `core`: Identifiers, players, games, moves, RNG, settings, errors
//! - `rules`: The combat resolver
//! - `storage`: Namespaced record storage and typed clients
//! - `manager`: Authenticated load, mutate, and save operations

pub mod cards;
pub mod core;
pub mod manager;
pub mod rules;
pub mod storage;

// Re-export commonly used types
pub use crate::cards::{CardClass, CardKind, Catalog, Deck, DECK_SIZE, STACK_COUNT, STACK_SIZE};

pub use crate::core::{
    DeckRng, DuelError, Game, GameId, GameStatus, Move, Player, PlayerId, PlayerStatus, Secret,
    Settings,
};

pub use crate::manager::GameManager;

pub use crate::rules::{resolve, resolve_codes, Outcome, Rule};

pub use crate::storage::{driver_from_settings, Client, Driver, MemoryDriver, RedisDriver};
