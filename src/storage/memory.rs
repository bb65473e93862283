//! In-process storage driver.
//!
//! One map from `"<namespace>:<id>"` to record text, behind a reader/writer
//! lock: lookups run in parallel, writes are exclusive. Each instance is
//! independent; share one through `Arc` to share data.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;
use uuid::Uuid;

use super::{record_key, Driver};
use crate::core::DuelError;

/// Storage driver backed by a locked hash map.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    items: RwLock<FxHashMap<String, String>>,
}

impl MemoryDriver {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every write is a single map operation, so a panicking writer cannot
    // leave the map half-updated and the poison flag can be ignored.
    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<String, String>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<String, String>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for MemoryDriver {
    fn find_all(&self, namespace: &str) -> Result<Vec<String>, DuelError> {
        let prefix = format!("{namespace}:");
        let items = self.read();

        let mut matching: Vec<(&String, &String)> =
            items.iter().filter(|(k, _)| k.starts_with(&prefix)).collect();
        matching.sort_unstable_by(|a, b| a.0.cmp(b.0));

        Ok(matching.into_iter().map(|(_, v)| v.clone()).collect())
    }

    fn find_one(&self, namespace: &str, id: Uuid) -> Result<String, DuelError> {
        let key = record_key(namespace, id);
        self.read()
            .get(&key)
            .cloned()
            .ok_or(DuelError::NotFound { key })
    }

    fn upsert_one(&self, namespace: &str, id: Uuid, value: String) -> Result<(), DuelError> {
        let key = record_key(namespace, id);
        tracing::debug!(%key, "memory upsert");
        self.write().insert(key, value);
        Ok(())
    }

    fn delete_one(&self, namespace: &str, id: Uuid) -> Result<(), DuelError> {
        let key = record_key(namespace, id);
        tracing::debug!(%key, "memory delete");
        self.write().remove(&key);
        Ok(())
    }
}
