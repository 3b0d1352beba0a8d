//! In-memory duplex transport for tests and single-process wiring.
//!
//! Two unbounded tokio channels model the browser port pair: each side's
//! outbound port feeds the other side's inbound pump. Delivery is FIFO
//! within a port and at most once per envelope; nothing orders envelopes
//! across distinct ports.

use crate::bridge::domain::Envelope;
use crate::bridge::ports::{MessagePort, TransportError, TransportResult};
use crate::bridge::services::MessageBridge;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Outbound port half backed by an unbounded in-memory channel.
#[derive(Debug, Clone)]
pub struct InMemoryPort {
    sender: mpsc::UnboundedSender<Envelope>,
}

#[async_trait]
impl MessagePort for InMemoryPort {
    async fn send(&self, envelope: Envelope) -> TransportResult<()> {
        self.sender
            .send(envelope)
            .map_err(|_| TransportError::PeerClosed)
    }
}

/// One side of a duplex link: the outbound port plus the inbound stream
/// the peer writes into.
#[derive(Debug)]
pub struct PortEndpoint {
    /// Outbound half towards the peer.
    pub port: InMemoryPort,
    /// Inbound envelopes written by the peer.
    pub inbound: mpsc::UnboundedReceiver<Envelope>,
}

/// A pair of bridges already wired back to back with running pumps.
#[derive(Debug)]
pub struct BridgePair {
    /// Bridge for the first context.
    pub left: Arc<MessageBridge>,
    /// Bridge for the second context.
    pub right: Arc<MessageBridge>,
}

/// Factory for in-memory duplex links.
#[derive(Debug, Clone, Copy)]
pub struct InMemoryDuplex;

impl InMemoryDuplex {
    /// Creates two connected raw endpoints.
    ///
    /// Callers that need manual control over inbound processing (for
    /// example, to inject duplicate responses) can drive
    /// [`MessageBridge::handle_inbound`] themselves.
    #[must_use]
    pub fn endpoints() -> (PortEndpoint, PortEndpoint) {
        let (left_tx, right_rx) = mpsc::unbounded_channel();
        let (right_tx, left_rx) = mpsc::unbounded_channel();
        (
            PortEndpoint {
                port: InMemoryPort { sender: left_tx },
                inbound: left_rx,
            },
            PortEndpoint {
                port: InMemoryPort { sender: right_tx },
                inbound: right_rx,
            },
        )
    }

    /// Creates two bridges wired back to back with pump tasks running.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn connected_pair() -> BridgePair {
        Self::connected_pair_with_timeout(crate::bridge::services::DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates a connected pair whose requests use the given timeout.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn connected_pair_with_timeout(timeout: Duration) -> BridgePair {
        let (left_end, right_end) = Self::endpoints();
        let left =
            Arc::new(MessageBridge::new(Arc::new(left_end.port)).with_request_timeout(timeout));
        let right =
            Arc::new(MessageBridge::new(Arc::new(right_end.port)).with_request_timeout(timeout));
        drop(MessageBridge::spawn_pump(Arc::clone(&left), left_end.inbound));
        drop(MessageBridge::spawn_pump(
            Arc::clone(&right),
            right_end.inbound,
        ));
        BridgePair { left, right }
    }
}
