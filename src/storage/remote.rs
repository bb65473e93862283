//! Redis storage driver.
//!
//! Each record is a plain string value under `"<namespace>:<id>"`. The
//! driver holds a client handle only; a connection is opened per operation,
//! so one driver can be shared between threads without a pool.

use redis::{Commands, IntoConnectionInfo};
use uuid::Uuid;

use super::{record_key, Driver};
use crate::core::{DuelError, Settings};

/// Storage driver backed by a Redis server.
#[derive(Clone, Debug)]
pub struct RedisDriver {
    client: redis::Client,
}

impl RedisDriver {
    /// Prepare a driver for the server named in `settings`.
    ///
    /// Only the address is checked here. The server is first contacted by
    /// the first operation.
    pub fn new(settings: &Settings) -> Result<Self, DuelError> {
        let mut info = format!("redis://{}/", settings.redis_address).into_connection_info()?;
        info.redis.db = settings.redis_database;
        if !settings.redis_password.is_empty() {
            info.redis.password = Some(settings.redis_password.clone());
        }

        let client = redis::Client::open(info)?;
        Ok(Self { client })
    }

    fn connection(&self) -> Result<redis::Connection, DuelError> {
        Ok(self.client.get_connection()?)
    }
}

/// Match pattern for every key in `namespace`.
fn namespace_pattern(namespace: &str) -> String {
    let mut pattern = String::with_capacity(namespace.len() + 2);
    for c in namespace.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push_str(":*");
    pattern
}

impl Driver for RedisDriver {
    fn find_all(&self, namespace: &str) -> Result<Vec<String>, DuelError> {
        let mut con = self.connection()?;

        // SCAN may report a key more than once.
        let mut keys: Vec<String> = con.scan_match::<_, String>(namespace_pattern(namespace))?.collect();
        keys.sort_unstable();
        keys.dedup();

        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            match con.get::<_, Option<String>>(&key)? {
                Some(value) => values.push(value),
                // Deleted between the scan and the read.
                None => tracing::warn!(%key, "record vanished during listing"),
            }
        }
        Ok(values)
    }

    fn find_one(&self, namespace: &str, id: Uuid) -> Result<String, DuelError> {
        let key = record_key(namespace, id);
        let value: Option<String> = self.connection()?.get(&key)?;
        value.ok_or(DuelError::NotFound { key })
    }

    fn upsert_one(&self, namespace: &str, id: Uuid, value: String) -> Result<(), DuelError> {
        let key = record_key(namespace, id);
        tracing::debug!(%key, "redis upsert");
        self.connection()?.set::<_, _, ()>(&key, value)?;
        Ok(())
    }

    fn delete_one(&self, namespace: &str, id: Uuid) -> Result<(), DuelError> {
        let key = record_key(namespace, id);
        tracing::debug!(%key, "redis delete");
        self.connection()?.del::<_, ()>(&key)?;
        Ok(())
    }
}
