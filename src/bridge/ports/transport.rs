//! Transport port carrying envelopes to the paired context.

use crate::bridge::domain::Envelope;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Outbound half of the channel to one peer context.
///
/// A port delivers envelopes in order (FIFO within the port) and at most
/// once per envelope. No ordering is guaranteed across different ports.
#[async_trait]
pub trait MessagePort: Send + Sync {
    /// Sends one envelope to the paired context.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::PeerClosed`] when the paired context has
    /// torn down, or [`TransportError::Failure`] on any other delivery
    /// fault.
    async fn send(&self, envelope: Envelope) -> TransportResult<()>;
}

/// Errors returned by transport implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The paired context is gone; nothing sent on this port can arrive.
    #[error("peer port closed")]
    PeerClosed,

    /// Delivery failed for a transport-specific reason.
    #[error("transport failure: {0}")]
    Failure(String),
}
