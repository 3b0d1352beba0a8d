//! Caller-facing error types for bridge operations.

use crate::bridge::domain::{Channel, WireError};
use crate::bridge::ports::TransportError;
use std::time::Duration;
use thiserror::Error;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced by [`crate::bridge::services::MessageBridge`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The underlying transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The peer rejected a request with a normalised wire error.
    #[error("peer rejected request: {0}")]
    Rejected(WireError),

    /// No response arrived within the configured request timeout.
    #[error("request on {channel} timed out after {waited:?}")]
    RequestTimedOut {
        /// Channel the request was sent on.
        channel: Channel,
        /// How long the caller waited before giving up.
        waited: Duration,
    },

    /// The bridge was torn down while the request was still pending.
    #[error("request on {0} abandoned: bridge torn down before a response arrived")]
    RequestAbandoned(Channel),

    /// Shared bridge state was poisoned by a panicking thread.
    #[error("bridge state lock poisoned")]
    StatePoisoned,
}

impl BridgeError {
    /// Returns the wire error when the peer rejected the request.
    #[must_use]
    pub const fn rejection(&self) -> Option<&WireError> {
        match self {
            Self::Rejected(wire) => Some(wire),
            _ => None,
        }
    }
}
