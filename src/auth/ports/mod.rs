//! Port contracts for the external login collaborators.

mod config;
mod crypto;
mod remote_api;

pub use config::{ConfigKey, ConfigStore, ConfigStoreError, ConfigStoreResult};
pub use crypto::{CryptoEngine, CryptoError, CryptoResult};
pub use remote_api::{RemoteApi, RemoteApiError, RemoteApiResult};
