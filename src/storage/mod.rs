//! Persistence: namespaced key-value storage for players and games.
//!
//! ## Layers
//!
//! - `Driver`: raw text storage keyed by `"<namespace>:<id>"`. Two drivers
//!   ship with the crate: `MemoryDriver` and `RedisDriver`.
//! - `Client<T>`: binds a driver to one namespace and handles JSON
//!   encoding for an entity type.
//!
//! ## Guarantees
//!
//! Every driver behaves the same way:
//! - `find_all` returns the namespace's records sorted by ascending key.
//!   Identifiers are time-ordered UUIDs, so this is creation order.
//! - `find_one` fails with `DuelError::NotFound` for a missing key.
//! - `upsert_one` overwrites, and is visible to the next read.
//! - `delete_one` succeeds whether or not the key exists.
//!
//! ```
//! use std::sync::Arc;
//! use stack_duel::core::{Player, PlayerId};
//! use stack_duel::storage::{Client, MemoryDriver, PLAYER_NAMESPACE};
//!
//! let players: Client<Player> = Client::new(Arc::new(MemoryDriver::new()), PLAYER_NAMESPACE);
//!
//! let alice = Player::create("Alice").unwrap();
//! players.upsert_one(alice.id.uuid(), &alice).unwrap();
//!
//! assert_eq!(players.find_one(alice.id.uuid()).unwrap(), alice);
//! assert!(players.find_one(PlayerId::generate().uuid()).is_err());
//! ```

pub mod memory;
pub mod remote;

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::core::{DuelError, Settings};

pub use memory::MemoryDriver;
pub use remote::RedisDriver;

/// Namespace for player records.
pub const PLAYER_NAMESPACE: &str = "player";

/// Namespace for game records.
pub const GAME_NAMESPACE: &str = "game";

/// Build the storage key for a record.
#[must_use]
pub fn record_key(namespace: &str, id: Uuid) -> String {
    format!("{namespace}:{id}")
}

/// Raw record storage.
///
/// Values are opaque text; encoding is the caller's concern.
pub trait Driver: Send + Sync {
    /// Every value in `namespace`, sorted by ascending key.
    fn find_all(&self, namespace: &str) -> Result<Vec<String>, DuelError>;

    /// The value stored at `namespace:id`.
    fn find_one(&self, namespace: &str, id: Uuid) -> Result<String, DuelError>;

    /// Store `value` at `namespace:id`, replacing any previous value.
    fn upsert_one(&self, namespace: &str, id: Uuid, value: String) -> Result<(), DuelError>;

    /// Remove `namespace:id` if present.
    fn delete_one(&self, namespace: &str, id: Uuid) -> Result<(), DuelError>;
}

/// Pick a driver for the given settings.
///
/// Returns a Redis driver when Redis is enabled, otherwise a fresh,
/// empty in-memory driver.
pub fn driver_from_settings(settings: &Settings) -> Result<Arc<dyn Driver>, DuelError> {
    if settings.redis_enabled {
        tracing::info!(
            address = %settings.redis_address,
            database = settings.redis_database,
            "using redis storage"
        );
        Ok(Arc::new(RedisDriver::new(settings)?))
    } else {
        tracing::info!("using in-memory storage");
        Ok(Arc::new(MemoryDriver::new()))
    }
}

/// Typed access to one namespace.
///
/// Records are stored as JSON. A record that fails to decode surfaces as
/// `DuelError::Codec`, never as `NotFound`.
pub struct Client<T> {
    driver: Arc<dyn Driver>,
    namespace: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
            namespace: self.namespace.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl<T: Serialize + DeserializeOwned> Client<T> {
    /// Bind `driver` to `namespace`.
    pub fn new(driver: Arc<dyn Driver>, namespace: impl Into<String>) -> Self {
        Self {
            driver,
            namespace: namespace.into(),
            _entity: PhantomData,
        }
    }

    /// Get the namespace this client reads and writes.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Every record in the namespace, in ascending id order.
    pub fn find_all(&self) -> Result<Vec<T>, DuelError> {
        self.driver
            .find_all(&self.namespace)?
            .iter()
            .map(|raw| serde_json::from_str(raw).map_err(DuelError::from))
            .collect()
    }

    /// The record with the given id.
    pub fn find_one(&self, id: Uuid) -> Result<T, DuelError> {
        let raw = self.driver.find_one(&self.namespace, id)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Store a record, replacing any previous one with the same id.
    pub fn upsert_one(&self, id: Uuid, value: &T) -> Result<(), DuelError> {
        let encoded = serde_json::to_string(value)?;
        self.driver.upsert_one(&self.namespace, id, encoded)
    }

    /// Remove a record. Missing records are not an error.
    pub fn delete_one(&self, id: Uuid) -> Result<(), DuelError> {
        self.driver.delete_one(&self.namespace, id)
    }
}
