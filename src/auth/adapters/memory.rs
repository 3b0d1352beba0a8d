//! In-memory config store for tests and single-process wiring.

use crate::auth::ports::{ConfigKey, ConfigStore, ConfigStoreError, ConfigStoreResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe in-memory implementation of [`ConfigStore`].
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    state: RwLock<HashMap<ConfigKey, Value>>,
}

impl InMemoryConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn read(&self, key: ConfigKey) -> ConfigStoreResult<Option<Value>> {
        let state = self
            .state
            .read()
            .map_err(|_| ConfigStoreError::LockPoisoned)?;
        Ok(state.get(&key).cloned())
    }

    async fn write(&self, key: ConfigKey, value: Value) -> ConfigStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ConfigStoreError::LockPoisoned)?;
        state.insert(key, value);
        Ok(())
    }
}
