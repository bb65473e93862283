//! Moves: the record of one resolved attack.
//!
//! A `Move` is built once by `Game::execute_move`, appended to the game's
//! history, and never changed afterwards.

use serde::{Deserialize, Serialize};

use super::entity::PlayerId;
use crate::cards::CardKind;
use crate::rules::Outcome;

/// One resolved attack.
///
/// `winner` is `None` when the attack was a tie.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub attacker: PlayerId,
    pub attacker_stack: usize,
    pub attacker_card: CardKind,
    pub defender: PlayerId,
    pub defender_stack: usize,
    pub defender_card: CardKind,
    pub winner: Option<PlayerId>,
}

impl Move {
    /// Check if the attack was a tie.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// Recover the outcome from the attacker's point of view.
    ///
    /// Self-attacks (attacker == defender) report `AttackerWins` for any
    /// non-tie result.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.winner {
            None => Outcome::Tie,
            Some(w) if w == self.attacker => Outcome::AttackerWins,
            Some(_) => Outcome::DefenderWins,
        }
    }
}
