//! Duel rules.
//!
//! `combat` decides single attacks. Everything stateful (turns, history,
//! lifecycle) lives on `core::Game`, which calls into this module but never
//! re-implements its precedence.

pub mod combat;

pub use combat::{resolve, resolve_codes, ruling, Outcome, Rule, Ruling};
