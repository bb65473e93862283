//! Players: identity, credentials, affiliation, and deck.
//!
//! A player is created `Unaffiliated` with an empty deck. It becomes
//! `Accepted` once it owns or is admitted to a game, and ends the game as
//! `Lost` or `Won`.

use serde::{Deserialize, Serialize};

use super::entity::{PlayerId, Secret};
use super::error::DuelError;
use crate::cards::{CardKind, Deck};

/// Longest allowed display name, in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 32;

/// Affiliation of a player with a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Unaffiliated,
    Requested,
    Accepted,
    Ready,
    Lost,
    Won,
}

/// A player and its deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub secret: Secret,
    pub status: PlayerStatus,
    pub deck: Deck,
}

impl Player {
    /// Register a new player.
    ///
    /// The name is trimmed before it is checked and stored.
    ///
    /// ```
    /// use stack_duel::core::{Player, PlayerStatus};
    ///
    /// let player = Player::create("  Alice ").unwrap();
    /// assert_eq!(player.name, "Alice");
    /// assert_eq!(player.status, PlayerStatus::Unaffiliated);
    /// assert!(player.deck.is_empty());
    /// ```
    pub fn create(name: &str) -> Result<Self, DuelError> {
        let name = name.trim();
        check_name(name)?;

        Ok(Self {
            id: PlayerId::generate(),
            name: name.to_string(),
            secret: Secret::generate(),
            status: PlayerStatus::Unaffiliated,
            deck: Deck::new(),
        })
    }

    /// Check identity fields. Does not look at the deck.
    pub fn validate(&self) -> Result<(), DuelError> {
        if self.id.is_nil() {
            return Err(DuelError::PlayerInvalidId);
        }
        check_name(self.name.trim())?;
        if self.secret.is_nil() {
            return Err(DuelError::PlayerInvalidSecret);
        }

        Ok(())
    }

    /// Check that the deck is a full, legal deal.
    pub fn validate_deck(&self) -> Result<(), DuelError> {
        self.deck.validate()
    }

    /// Read the top card of one of this player's stacks.
    pub fn card(&self, stack: usize) -> Result<CardKind, DuelError> {
        self.deck.top(stack)
    }

    /// Check a presented secret against this player's.
    pub fn authenticate(&self, secret: &Secret) -> Result<(), DuelError> {
        if self.secret.is_nil() || self.secret != *secret {
            return Err(DuelError::PlayerInvalid);
        }
        Ok(())
    }
}

fn check_name(trimmed: &str) -> Result<(), DuelError> {
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DuelError::PlayerInvalidName);
    }
    Ok(())
}
