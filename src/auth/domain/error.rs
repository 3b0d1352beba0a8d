//! Validation errors for login domain types.

use thiserror::Error;

/// Validation failures raised by login domain value objects.
///
/// These fail fast at the point of use and are never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The passphrase is empty.
    #[error("passphrase must not be empty")]
    EmptyPassphrase,

    /// The security token is malformed.
    #[error("invalid security token: {0}")]
    InvalidSecurityToken(String),

    /// The trusted-domain URL is malformed or missing.
    #[error("invalid trusted domain: {0}")]
    InvalidTrustedDomain(String),

    /// Stored account settings could not be interpreted.
    #[error("invalid account settings: {0}")]
    InvalidSettings(String),
}
