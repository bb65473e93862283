//! Runtime settings.
//!
//! Settings are read from environment variables at startup. Every field has
//! a default, and an empty variable counts as unset:
//!
//! | Variable              | Field            | Default          |
//! |-----------------------|------------------|------------------|
//! | `DUEL_PORT`           | `port`           | `8080`           |
//! | `DUEL_REDIS_ENABLED`  | `redis_enabled`  | `false`          |
//! | `DUEL_REDIS_ADDRESS`  | `redis_address`  | `localhost:6379` |
//! | `DUEL_REDIS_PASSWORD` | `redis_password` | empty            |
//! | `DUEL_REDIS_DATABASE` | `redis_database` | `0`              |
//!
//! Only the Redis fields are consumed by this crate (to pick a storage
//! driver); `port` is carried for the serving layer.

use thiserror::Error;

pub const PORT_KEY: &str = "DUEL_PORT";
pub const REDIS_ENABLED_KEY: &str = "DUEL_REDIS_ENABLED";
pub const REDIS_ADDRESS_KEY: &str = "DUEL_REDIS_ADDRESS";
pub const REDIS_PASSWORD_KEY: &str = "DUEL_REDIS_PASSWORD";
pub const REDIS_DATABASE_KEY: &str = "DUEL_REDIS_DATABASE";

/// A settings variable held an unparseable value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port value {0:?}")]
    InvalidPort(String),
    #[error("invalid redis enabled value {0:?}")]
    InvalidFlag(String),
    #[error("invalid redis database value {0:?}")]
    InvalidDatabase(String),
}

/// Process settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub redis_enabled: bool,
    /// `host:port` of the Redis server.
    pub redis_address: String,
    /// Empty means no password.
    pub redis_password: String,
    pub redis_database: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 8080,
            redis_enabled: false,
            redis_address: "localhost:6379".to_string(),
            redis_password: String::new(),
            redis_database: 0,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// ```
    /// use stack_duel::core::Settings;
    ///
    /// let settings = Settings::from_lookup(|key| match key {
    ///     "DUEL_REDIS_ENABLED" => Some("true".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert!(settings.redis_enabled);
    /// assert_eq!(settings.port, 8080);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut settings = Self::default();

        if let Some(value) = get(PORT_KEY) {
            settings.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort(value))?;
        }
        if let Some(value) = get(REDIS_ENABLED_KEY) {
            settings.redis_enabled = parse_flag(&value).ok_or(ConfigError::InvalidFlag(value))?;
        }
        if let Some(value) = get(REDIS_ADDRESS_KEY) {
            settings.redis_address = value;
        }
        if let Some(value) = get(REDIS_PASSWORD_KEY) {
            settings.redis_password = value;
        }
        if let Some(value) = get(REDIS_DATABASE_KEY) {
            settings.redis_database = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDatabase(value))?;
        }

        Ok(settings)
    }

    /// Enable the Redis driver at `address`.
    #[must_use]
    pub fn with_redis(mut self, address: impl Into<String>) -> Self {
        self.redis_enabled = true;
        self.redis_address = address.into();
        self
    }

    #[must_use]
    pub fn with_redis_password(mut self, password: impl Into<String>) -> Self {
        self.redis_password = password.into();
        self
    }

    #[must_use]
    pub fn with_redis_database(mut self, database: i64) -> Self {
        self.redis_database = database;
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Accept the usual spellings of a boolean flag.
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
