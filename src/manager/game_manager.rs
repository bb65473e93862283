//! Request-level operations over persisted players and games.
//!
//! Every mutating call follows the same shape: load, authenticate, apply a
//! model operation, save. A rejected request leaves storage unchanged.

use std::sync::Arc;

use crate::core::{DuelError, Game, GameId, Move, Player, PlayerId, Secret};
use crate::storage::{Client, Driver, GAME_NAMESPACE, PLAYER_NAMESPACE};

/// Player and game stores sharing one driver.
///
/// ```
/// use std::sync::Arc;
/// use stack_duel::manager::GameManager;
/// use stack_duel::storage::MemoryDriver;
///
/// let manager = GameManager::new(Arc::new(MemoryDriver::new()));
///
/// let alice = manager.register_player("Alice").unwrap();
/// let game = manager.create_game(alice.id, &alice.secret).unwrap();
///
/// assert_eq!(manager.game(game.id).unwrap(), game);
/// assert_eq!(manager.games().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameManager {
    players: Client<Player>,
    games: Client<Game>,
}

impl GameManager {
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self {
            players: Client::new(Arc::clone(&driver), PLAYER_NAMESPACE),
            games: Client::new(driver, GAME_NAMESPACE),
        }
    }

    /// Create and store a new player.
    ///
    /// The returned record carries the player's secret; it is the only time
    /// the caller is handed it.
    pub fn register_player(&self, name: &str) -> Result<Player, DuelError> {
        let player = Player::create(name)?;
        self.players.upsert_one(player.id.uuid(), &player)?;
        tracing::info!(player = %player.id, name = %player.name, "player registered");
        Ok(player)
    }

    /// Load a player.
    pub fn player(&self, id: PlayerId) -> Result<Player, DuelError> {
        self.players.find_one(id.uuid()).map_err(|e| match e {
            DuelError::NotFound { .. } => DuelError::PlayerNotFound(id),
            other => other,
        })
    }

    /// Open a game owned by `owner`.
    ///
    /// The owner's stored record is updated to `Accepted` along with the new
    /// game.
    pub fn create_game(&self, owner: PlayerId, secret: &Secret) -> Result<Game, DuelError> {
        let player = self.player(owner)?;
        player.authenticate(secret)?;

        let game = Game::create(player)?;
        self.players.upsert_one(owner.uuid(), &game.players[0])?;
        self.games.upsert_one(game.id.uuid(), &game)?;
        Ok(game)
    }

    /// Load a game.
    pub fn game(&self, id: GameId) -> Result<Game, DuelError> {
        self.games.find_one(id.uuid()).map_err(|e| match e {
            DuelError::NotFound { .. } => DuelError::GameNotFound(id),
            other => other,
        })
    }

    /// Every stored game, oldest first.
    pub fn games(&self) -> Result<Vec<Game>, DuelError> {
        self.games.find_all()
    }

    /// Resolve an attack in a stored game and save the result.
    ///
    /// `secret` must belong to `attacker` as seated in the game.
    pub fn execute_move(
        &self,
        game_id: GameId,
        attacker: PlayerId,
        secret: &Secret,
        attacker_stack: usize,
        defender: PlayerId,
        defender_stack: usize,
    ) -> Result<Move, DuelError> {
        let mut game = self.game(game_id)?;
        game.player(attacker)?.authenticate(secret)?;

        let record = game
            .execute_move(attacker, attacker_stack, defender, defender_stack)
            .inspect_err(|e| {
                tracing::warn!(game = %game_id, %attacker, %defender, error = %e, "move rejected");
            })?;

        self.games.upsert_one(game_id.uuid(), &game)?;
        Ok(record)
    }

    /// Remove a game. Only its owner may do this.
    pub fn delete_game(
        &self,
        game_id: GameId,
        requester: PlayerId,
        secret: &Secret,
    ) -> Result<(), DuelError> {
        let game = self.game(game_id)?;
        game.ensure_owner(requester)?;
        game.player(requester)?.authenticate(secret)?;

        self.games.delete_one(game_id.uuid())?;
        tracing::info!(game = %game_id, "game deleted");
        Ok(())
    }
}
