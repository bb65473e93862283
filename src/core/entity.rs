//! Entity identification.
//!
//! Players and games are addressed by UUIDs wrapped in distinct newtypes so
//! that a game id can never be passed where a player id is expected.
//!
//! ## Ordering
//!
//! Identifiers are version-7 UUIDs. Their canonical (lowercase, hyphenated)
//! text sorts in generation order, which the storage layer relies on when it
//! enumerates records by key.
//!
//! ```
//! use stack_duel::core::PlayerId;
//!
//! let first = PlayerId::generate();
//! let second = PlayerId::generate();
//! assert!(first.to_string() < second.to_string());
//! assert!(!first.is_nil());
//! ```
//!
//! Secrets are version-4 UUIDs: random, not ordered, never used as keys.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// The nil identifier. Never valid for a stored player.
    pub const NIL: Self = Self(Uuid::nil());

    /// Allocate a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn is_nil(self) -> bool {
        self.0.is_nil()
    }

    /// Get the raw UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Unique identifier of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Allocate a fresh, time-ordered identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn is_nil(self) -> bool {
        self.0.is_nil()
    }

    /// Get the raw UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for GameId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A player's credential.
///
/// Handed out once at registration and presented back to act as that player.
/// `Debug` redacts the value so secrets do not end up in logs.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(pub Uuid);

impl Secret {
    /// The nil secret. Never valid.
    pub const NIL: Self = Self(Uuid::nil());

    /// Allocate a fresh random secret.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn is_nil(self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nil() {
            f.write_str("Secret(nil)")
        } else {
            f.write_str("Secret(..)")
        }
    }
}
