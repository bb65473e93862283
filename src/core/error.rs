//! Error taxonomy shared by the rules engine and the storage layer.
//!
//! Every fallible operation returns `Result<_, DuelError>`. Nothing here is
//! fatal: callers decide whether to retry, report, or abort a request.

use thiserror::Error;

use super::entity::{GameId, PlayerId};
use crate::cards::CardKind;

/// Errors produced by game rules and persistence.
#[derive(Debug, Error)]
pub enum DuelError {
    /// No record is stored under the given key.
    #[error("not found: {key}")]
    NotFound { key: String },

    /// No game exists with the given identifier.
    #[error("game not found: {0}")]
    GameNotFound(GameId),

    /// The game has no participant with the given identifier.
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("invalid player id")]
    PlayerInvalidId,

    #[error("player invalid name")]
    PlayerInvalidName,

    #[error("invalid player secret")]
    PlayerInvalidSecret,

    /// The presented credentials do not belong to the player.
    #[error("invalid player")]
    PlayerInvalid,

    /// The player tried an owner-only operation on a game it does not own.
    #[error("player not owner: {0}")]
    PlayerNotOwner(PlayerId),

    #[error("invalid deck counts, must be five stacks of five cards")]
    InvalidDeckCounts,

    #[error("invalid card count for {kind:?} (expected={expected}, found={found})")]
    InvalidCardCount {
        kind: CardKind,
        expected: usize,
        found: usize,
    },

    #[error("invalid stack {index} (stacks={stacks})")]
    InvalidStack { index: usize, stacks: usize },

    #[error("empty stack {index}")]
    EmptyStack { index: usize },

    #[error("game not started")]
    GameNotStarted,

    #[error("wrong player turn")]
    WrongTurn,

    /// A card code outside the catalog reached the resolver.
    #[error("illegal move: unknown card code {code}")]
    IllegalMove { code: u8 },

    /// A stored record could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The remote store rejected an operation.
    #[error("backend error: {0}")]
    Backend(#[from] redis::RedisError),
}
