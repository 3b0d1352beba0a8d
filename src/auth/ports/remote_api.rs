//! Remote-API port for CSRF retrieval, MFA status, and settings sync.

use crate::auth::domain::{AccountSettings, CsrfToken};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for remote-API operations.
pub type RemoteApiResult<T> = Result<T, RemoteApiError>;

/// Network-facing capability consumed by the login flow.
///
/// The transport is an external collaborator; every call is asynchronous
/// and fallible.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Requests a fresh anti-forgery token.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteApiError`] when the server is unreachable or
    /// refuses to issue a token.
    async fn retrieve_csrf_token(&self) -> RemoteApiResult<CsrfToken>;

    /// Returns whether a further multi-factor step is pending for this
    /// account.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteApiError`] when the status cannot be determined.
    async fn is_mfa_required(&self) -> RemoteApiResult<bool>;

    /// Fetches the account settings.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteApiError`] when the settings cannot be fetched.
    /// Callers in the login flow substitute defaults rather than fail.
    async fn sync_settings(&self) -> RemoteApiResult<AccountSettings>;
}

/// Errors returned by remote-API implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteApiError {
    /// The server could not be reached.
    #[error("remote API unreachable: {0}")]
    Unreachable(String),

    /// The server refused the operation.
    #[error("remote API rejected the call: {0}")]
    Rejected(String),
}
