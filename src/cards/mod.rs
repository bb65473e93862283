//! Card system: kinds, catalog, and decks.
//!
//! ## Key Types
//!
//! - `CardKind`: One of the nine card kinds
//! - `CardClass`: Combat class (ranked, wildcards, apex)
//! - `Catalog`: Per-kind supply of a full deck
//! - `Deck`: Five stacks of cards, top card first

pub mod catalog;
pub mod deck;
pub mod kind;

pub use catalog::{Catalog, DECK_SIZE, STACK_COUNT, STACK_SIZE};
pub use deck::{Deck, Stack};
pub use kind::{CardClass, CardKind};
