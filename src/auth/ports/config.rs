//! Config-store port for key-value persistence of vault settings.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type for config-store operations.
pub type ConfigStoreResult<T> = Result<T, ConfigStoreError>;

/// Closed set of persisted configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// The anti-phishing security token.
    SecurityToken,
    /// The vault's trusted origin.
    TrustedDomain,
}

impl ConfigKey {
    /// Returns the stable storage name for the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecurityToken => "security-token",
            Self::TrustedDomain => "trusted-domain",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence contract for vault configuration.
///
/// Values are stored as JSON; domain types validate on the way out, not
/// on the way in, because the store is an external collaborator whose
/// contents this core does not control.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Reads the value for a key.
    ///
    /// Returns `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError`] when the store cannot be read.
    async fn read(&self, key: ConfigKey) -> ConfigStoreResult<Option<Value>>;

    /// Writes the value for a key, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigStoreError`] when the store cannot be written.
    async fn write(&self, key: ConfigKey, value: Value) -> ConfigStoreResult<()>;
}

/// Errors returned by config-store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigStoreError {
    /// The backing store failed.
    #[error("config store failure: {0}")]
    Storage(String),

    /// The store's internal state lock was poisoned.
    #[error("config store state lock poisoned")]
    LockPoisoned,
}
