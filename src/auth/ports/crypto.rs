//! Crypto-engine port for key verification and passphrase login.

use crate::auth::domain::Passphrase;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for crypto-engine operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Cryptographic capability consumed by the login flow.
///
/// The algorithms themselves are external; this core only sequences the
/// calls and interprets their failures.
#[async_trait]
pub trait CryptoEngine: Send + Sync {
    /// Verifies the server's key material before any login attempt.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::VerificationFailed`] when the server key
    /// does not check out.
    async fn verify(&self) -> CryptoResult<()>;

    /// Submits the passphrase for verification against the user's key
    /// material.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidPassphrase`] when the passphrase
    /// does not unlock the key material.
    async fn login(&self, passphrase: &Passphrase) -> CryptoResult<()>;
}

/// Errors returned by crypto-engine implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The passphrase does not unlock the user's key material.
    #[error("invalid passphrase")]
    InvalidPassphrase,

    /// The server's key material failed verification.
    #[error("server key verification failed: {0}")]
    VerificationFailed(String),

    /// The engine itself failed.
    #[error("crypto engine failure: {0}")]
    Failure(String),
}
