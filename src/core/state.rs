//! Game state: roster, turn pointer, move history, and lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Open --(seats filled, started externally)--> Started --(terminal)--> Done
//! ```
//!
//! Only `create` and `execute_move` live here. Starting a game, removing
//! beaten cards, eliminating exhausted players, and advancing the turn are
//! follow-on steps of a resolved move that this type does not perform.
//!
//! The move history uses an `im::Vector` so that snapshots of a game are
//! cheap to clone.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::entity::{GameId, PlayerId};
use super::error::DuelError;
use super::player::{Player, PlayerStatus};
use crate::rules::combat;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Open,
    Started,
    Done,
}

/// A duel between two or more players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub owner: PlayerId,
    /// Participants in seating order.
    pub players: Vec<Player>,
    /// Whose turn it is. Unset until the game starts.
    pub current_player: Option<PlayerId>,
    /// Resolved moves, oldest first.
    pub moves: Vector<Move>,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Open a new game owned by `owner`.
    ///
    /// The owner's name is trimmed and the owner validated; the owner is
    /// seated first and marked `Accepted`.
    pub fn create(mut owner: Player) -> Result<Self, DuelError> {
        owner.name = owner.name.trim().to_string();
        owner.validate()?;
        owner.status = PlayerStatus::Accepted;

        let game = Self {
            id: GameId::generate(),
            owner: owner.id,
            players: vec![owner],
            current_player: None,
            moves: Vector::new(),
            status: GameStatus::Open,
            created_at: Utc::now(),
        };

        tracing::info!(game = %game.id, owner = %game.owner, "game created");
        Ok(game)
    }

    /// Find a participant.
    pub fn player(&self, id: PlayerId) -> Result<&Player, DuelError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(DuelError::PlayerNotFound(id))
    }

    /// Check if `id` owns this game.
    #[must_use]
    pub fn is_owner(&self, id: PlayerId) -> bool {
        self.owner == id
    }

    /// Require that `id` owns this game.
    pub fn ensure_owner(&self, id: PlayerId) -> Result<(), DuelError> {
        if self.is_owner(id) {
            Ok(())
        } else {
            Err(DuelError::PlayerNotOwner(id))
        }
    }

    /// Check the roster and the turn pointer.
    ///
    /// Every participant must pass `Player::validate`, and the current
    /// player, once set, must be one of them.
    pub fn validate(&self) -> Result<(), DuelError> {
        for player in &self.players {
            player.validate()?;
        }
        if let Some(current) = self.current_player {
            self.player(current)?;
        }
        Ok(())
    }

    /// Attack `defender`'s stack with the top card of one of `attacker`'s.
    ///
    /// On success the resolved move is appended to the history and returned.
    /// On failure the game is left untouched.
    pub fn execute_move(
        &mut self,
        attacker: PlayerId,
        attacker_stack: usize,
        defender: PlayerId,
        defender_stack: usize,
    ) -> Result<Move, DuelError> {
        if self.status != GameStatus::Started {
            return Err(DuelError::GameNotStarted);
        }
        if self.current_player != Some(attacker) {
            return Err(DuelError::WrongTurn);
        }

        let attacker_card = self.player(attacker)?.card(attacker_stack)?;
        let defender_card = self.player(defender)?.card(defender_stack)?;

        let ruling = combat::ruling(attacker_card, defender_card);
        tracing::debug!(
            game = %self.id,
            %attacker,
            %defender,
            %attacker_card,
            %defender_card,
            rule = ?ruling.rule,
            outcome = ?ruling.outcome,
            "attack resolved"
        );

        // TODO: remove the beaten card, eliminate players with no cards left,
        // and pass the turn once those rules are settled.
        let record = Move {
            attacker,
            attacker_stack,
            attacker_card,
            defender,
            defender_stack,
            defender_card,
            winner: ruling.outcome.winner(attacker, defender),
        };
        self.moves.push_back(record.clone());

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Deck};
    use crate::core::Secret;

    fn named(name: &str, deck: Deck) -> Player {
        Player {
            id: PlayerId::generate(),
            name: name.to_string(),
            secret: Secret::generate(),
            status: PlayerStatus::Accepted,
            deck,
        }
    }

    fn started_game() -> (Game, PlayerId, PlayerId) {
        let alice = named(
            "Alice",
            Deck::from_stacks([vec![CardKind::Spear], vec![CardKind::Dagger, CardKind::Crown]]),
        );
        let bob = named(
            "Bob",
            Deck::from_stacks([vec![CardKind::Mace, CardKind::Spear], vec![CardKind::Dagger, CardKind::Crown]]),
        );
        let (a, b) = (alice.id, bob.id);

        let mut game = Game::create(alice).unwrap();
        game.players.push(bob);
        game.status = GameStatus::Started;
        game.current_player = Some(a);
        (game, a, b)
    }

    #[test]
    fn test_create() {
        let owner = named("  Ryan  ", Deck::new());
        let owner = Player { status: PlayerStatus::Unaffiliated, ..owner };
        let owner_id = owner.id;

        let game = Game::create(owner).unwrap();

        assert!(!game.id.is_nil());
        assert_eq!(game.owner, owner_id);
        assert_eq!(game.status, GameStatus::Open);
        assert_eq!(game.current_player, None);
        assert!(game.moves.is_empty());
        assert_eq!(game.players.len(), 1);
        assert_eq!(game.players[0].name, "Ryan");
        assert_eq!(game.players[0].status, PlayerStatus::Accepted);
    }

    #[test]
    fn test_create_propagates_owner_errors() {
        let base = named("Ryan", Deck::new());

        let bad_id = Player { id: PlayerId::NIL, ..base.clone() };
        assert!(matches!(Game::create(bad_id), Err(DuelError::PlayerInvalidId)));

        let bad_name = Player { name: String::new(), ..base.clone() };
        assert!(matches!(Game::create(bad_name), Err(DuelError::PlayerInvalidName)));

        let bad_secret = Player { secret: Secret::NIL, ..base };
        assert!(matches!(Game::create(bad_secret), Err(DuelError::PlayerInvalidSecret)));
    }

    #[test]
    fn test_player_lookup() {
        let (game, a, _) = started_game();
        assert_eq!(game.player(a).unwrap().name, "Alice");

        let stranger = PlayerId::generate();
        assert!(matches!(game.player(stranger), Err(DuelError::PlayerNotFound(id)) if id == stranger));
    }

    #[test]
    fn test_ownership() {
        let (game, a, b) = started_game();
        assert!(game.is_owner(a));
        assert!(!game.is_owner(b));
        assert!(game.ensure_owner(a).is_ok());
        assert!(matches!(game.ensure_owner(b), Err(DuelError::PlayerNotOwner(id)) if id == b));
    }

    #[test]
    fn test_execute_move() {
        let (mut game, a, b) = started_game();

        let record = game.execute_move(a, 0, b, 1).unwrap();

        assert_eq!(
            record,
            Move {
                attacker: a,
                attacker_stack: 0,
                attacker_card: CardKind::Spear,
                defender: b,
                defender_stack: 1,
                defender_card: CardKind::Dagger,
                winner: Some(a),
            }
        );
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.moves[0], record);
    }

    #[test]
    fn test_execute_move_tie_has_no_winner() {
        let (mut game, a, b) = started_game();
        game.players[1].deck = Deck::from_stacks([vec![CardKind::Spear]]);

        let record = game.execute_move(a, 0, b, 0).unwrap();
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_execute_move_requires_started() {
        for status in [GameStatus::Open, GameStatus::Done] {
            let (mut game, a, b) = started_game();
            game.status = status;

            assert!(matches!(game.execute_move(a, 0, b, 1), Err(DuelError::GameNotStarted)));
            assert!(game.moves.is_empty());
        }
    }

    #[test]
    fn test_execute_move_wrong_turn() {
        let (mut game, a, b) = started_game();
        assert!(matches!(game.execute_move(b, 0, a, 1), Err(DuelError::WrongTurn)));
        assert!(game.moves.is_empty());

        game.current_player = None;
        assert!(matches!(game.execute_move(a, 0, b, 1), Err(DuelError::WrongTurn)));
    }

    #[test]
    fn test_execute_move_propagates_lookup_errors() {
        let (mut game, a, b) = started_game();

        assert!(matches!(
            game.execute_move(a, 9, b, 0),
            Err(DuelError::InvalidStack { index: 9, .. })
        ));
        assert!(matches!(
            game.execute_move(a, 0, PlayerId::generate(), 0),
            Err(DuelError::PlayerNotFound(_))
        ));

        game.players[1].deck = Deck::from_stacks([Vec::<CardKind>::new()]);
        assert!(matches!(
            game.execute_move(a, 0, b, 0),
            Err(DuelError::EmptyStack { index: 0 })
        ));

        let ghost = PlayerId::generate();
        game.current_player = Some(ghost);
        assert!(matches!(
            game.execute_move(ghost, 0, b, 0),
            Err(DuelError::PlayerNotFound(id)) if id == ghost
        ));

        assert!(game.moves.is_empty());
    }

    #[test]
    fn test_validate() {
        let (mut game, _, _) = started_game();
        assert!(game.validate().is_ok());

        game.current_player = Some(PlayerId::generate());
        assert!(matches!(game.validate(), Err(DuelError::PlayerNotFound(_))));

        game.current_player = None;
        game.players[1].name = String::new();
        assert!(matches!(game.validate(), Err(DuelError::PlayerInvalidName)));
    }

    #[test]
    fn test_serialization() {
        let (mut game, a, b) = started_game();
        game.execute_move(a, 0, b, 1).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"status\":\"started\""));

        let deserialized: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, deserialized);
    }
}
