//! Service-level errors for login orchestration.

use crate::auth::domain::{AuthDomainError, FailurePresentation};
use crate::auth::ports::{ConfigStoreError, CryptoError, RemoteApiError};
use crate::bridge::error::BridgeError;
use crate::registry::error::WorkerRegistryError;
use thiserror::Error;

/// Result type for login orchestration operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors surfaced by the login flow and its configuration helpers.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),

    /// The passphrase did not verify.
    ///
    /// Carries the consecutive-failure count and the UI policy derived
    /// from it.
    #[error("invalid passphrase (attempt {attempts})")]
    InvalidPassphrase {
        /// Consecutive failed attempts from this origin, including this
        /// one.
        attempts: u32,
        /// How the caller should present the failure.
        presentation: FailurePresentation,
    },

    /// A further multi-factor step is required before login completes.
    #[error("multi-factor authentication required")]
    MfaRequired,

    /// The crypto engine failed for a reason other than a bad
    /// passphrase.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The remote API failed a mandatory step.
    #[error(transparent)]
    RemoteApi(#[from] RemoteApiError),

    /// The config store failed.
    #[error(transparent)]
    Config(#[from] ConfigStoreError),

    /// Worker lookup failed while routing the outcome.
    #[error(transparent)]
    Registry(#[from] WorkerRegistryError),

    /// The bridge refused or failed a send.
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    /// An internal state lock was poisoned.
    #[error("login state lock poisoned")]
    StatePoisoned,
}

impl AuthError {
    /// Returns the stable error code transmitted across context
    /// boundaries.
    #[must_use]
    pub const fn wire_code(&self) -> &'static str {
        match self {
            Self::Domain(_) => "validation",
            Self::InvalidPassphrase { .. } => "invalid-passphrase",
            Self::MfaRequired => "mfa-required",
            Self::Crypto(_) => "crypto-failure",
            Self::RemoteApi(_) => "remote-api",
            Self::Config(_) => "config-store",
            Self::Registry(_) | Self::Bridge(_) | Self::StatePoisoned => "internal",
        }
    }
}
