//! The message bridge: emit/on dispatch and correlated request/response.
//!
//! One bridge instance lives in each execution context, paired with a
//! transport port to its peer. Both primitives are symmetric in every
//! context: either side may emit, listen, request, or respond.

use crate::bridge::domain::{Channel, Envelope, RequestId, ResponseStatus, WireError};
use crate::bridge::error::{BridgeError, BridgeResult};
use crate::bridge::ports::MessagePort;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Default upper bound on how long a `request` caller waits for the
/// single response before failing with
/// [`BridgeError::RequestTimedOut`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Handler invoked for each matching inbound emit.
type EmitHandler = dyn Fn(Value) + Send + Sync;

/// Responder contract for correlated requests.
///
/// A responder settles each request exactly once: resolve with a payload
/// or reject with a [`WireError`]. Native error values never cross the
/// boundary; the rejection is already in its transmissible shape.
#[async_trait]
pub trait RequestResponder: Send + Sync {
    /// Produces the single response for one inbound request payload.
    async fn respond(&self, payload: Value) -> Result<Value, WireError>;
}

/// Adapter implementing [`RequestResponder`] for an async closure.
pub struct FnResponder<F>(F);

#[async_trait]
impl<F, Fut> RequestResponder for FnResponder<F>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, WireError>> + Send,
{
    async fn respond(&self, payload: Value) -> Result<Value, WireError> {
        (self.0)(payload).await
    }
}

/// Wraps an async closure as a shareable responder.
pub fn responder_fn<F, Fut>(handler: F) -> Arc<FnResponder<F>>
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, WireError>> + Send,
{
    Arc::new(FnResponder(handler))
}

/// Bidirectional message endpoint for one execution context.
///
/// # Delivery semantics
///
/// - `emit` is at-most-once and unacknowledged; an emit for a channel with
///   no handler on the receiving side is dropped without error.
/// - `request` settles exactly once. A response whose correlation token
///   matches no pending request is ignored, as is a duplicate response for
///   an already-settled token.
/// - Ordering is FIFO within the underlying port only.
///
/// # Examples
///
/// ```
/// use vaultlink::bridge::adapters::memory::InMemoryDuplex;
/// use vaultlink::bridge::domain::Channel;
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pair = InMemoryDuplex::connected_pair();
/// pair.right.on(Channel::PageReady, |_payload| {})?;
/// pair.left.emit(Channel::PageReady, json!({})).await?;
/// # Ok(())
/// # }
/// ```
pub struct MessageBridge {
    outbound: Arc<dyn MessagePort>,
    handlers: RwLock<HashMap<Channel, Vec<Arc<EmitHandler>>>>,
    responders: RwLock<HashMap<Channel, Arc<dyn RequestResponder>>>,
    pending: Mutex<HashMap<RequestId, oneshot::Sender<Result<Value, WireError>>>>,
    request_timeout: Duration,
}

impl MessageBridge {
    /// Creates a bridge over the given outbound port with the default
    /// request timeout.
    #[must_use]
    pub fn new(outbound: Arc<dyn MessagePort>) -> Self {
        Self {
            outbound,
            handlers: RwLock::new(HashMap::new()),
            responders: RwLock::new(HashMap::new()),
            pending: Mutex::new(HashMap::new()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Registers an emit handler for a channel.
    ///
    /// Multiple handlers may be registered for the same channel; each
    /// matching inbound emit invokes all of them, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::StatePoisoned`] when the handler table lock
    /// is poisoned.
    pub fn on(
        &self,
        channel: Channel,
        handler: impl Fn(Value) + Send + Sync + 'static,
    ) -> BridgeResult<()> {
        let mut handlers = self.handlers.write().map_err(|_| BridgeError::StatePoisoned)?;
        handlers.entry(channel).or_default().push(Arc::new(handler));
        Ok(())
    }

    /// Returns whether any emit handler is registered for the channel.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::StatePoisoned`] when the handler table lock
    /// is poisoned.
    pub fn has_handlers(&self, channel: Channel) -> BridgeResult<bool> {
        let handlers = self.handlers.read().map_err(|_| BridgeError::StatePoisoned)?;
        Ok(handlers.get(&channel).is_some_and(|list| !list.is_empty()))
    }

    /// Registers the request responder for a channel, replacing any prior
    /// responder.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::StatePoisoned`] when the responder table
    /// lock is poisoned.
    pub fn respond(
        &self,
        channel: Channel,
        responder: Arc<dyn RequestResponder>,
    ) -> BridgeResult<()> {
        let mut responders = self
            .responders
            .write()
            .map_err(|_| BridgeError::StatePoisoned)?;
        responders.insert(channel, responder);
        Ok(())
    }

    /// Sends a fire-and-forget emit to the paired context.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] when the port cannot deliver.
    pub async fn emit(&self, channel: Channel, payload: Value) -> BridgeResult<()> {
        self.outbound
            .send(Envelope::Emit { channel, payload })
            .await?;
        Ok(())
    }

    /// Sends a correlated request and waits for its single response.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Rejected`] when the peer answers with an
    /// error payload, [`BridgeError::RequestTimedOut`] when no response
    /// arrives within the configured timeout, [`BridgeError::Transport`]
    /// when the request cannot be sent, and
    /// [`BridgeError::RequestAbandoned`] when the bridge is torn down
    /// while waiting.
    pub async fn request(&self, channel: Channel, payload: Value) -> BridgeResult<Value> {
        let id = RequestId::new();
        let (sender, receiver) = oneshot::channel();
        self.pending
            .lock()
            .map_err(|_| BridgeError::StatePoisoned)?
            .insert(id, sender);

        if let Err(error) = self
            .outbound
            .send(Envelope::Request {
                id,
                channel,
                payload,
            })
            .await
        {
            self.discard_pending(id)?;
            return Err(error.into());
        }

        match tokio::time::timeout(self.request_timeout, receiver).await {
            Err(_elapsed) => {
                self.discard_pending(id)?;
                Err(BridgeError::RequestTimedOut {
                    channel,
                    waited: self.request_timeout,
                })
            }
            Ok(Err(_dropped)) => Err(BridgeError::RequestAbandoned(channel)),
            Ok(Ok(Ok(value))) => Ok(value),
            Ok(Ok(Err(wire))) => Err(BridgeError::Rejected(wire)),
        }
    }

    /// Processes one envelope arriving from the paired context.
    ///
    /// Inbound emits fan out to registered handlers in registration order
    /// and are dropped silently when no handler matches. Inbound requests
    /// are answered by the registered responder, or rejected with a
    /// `no-responder` wire error so the caller is never left waiting.
    /// Inbound responses settle the matching pending request; unknown and
    /// duplicate correlation tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Transport`] when a response envelope cannot
    /// be sent back, or [`BridgeError::StatePoisoned`] when bridge state
    /// is poisoned.
    pub async fn handle_inbound(&self, envelope: Envelope) -> BridgeResult<()> {
        match envelope {
            Envelope::Emit { channel, payload } => self.dispatch_emit(channel, &payload),
            Envelope::Request {
                id,
                channel,
                payload,
            } => self.dispatch_request(id, channel, payload).await,
            Envelope::Response {
                id,
                status,
                payload,
            } => self.settle_response(id, status, payload),
        }
    }

    fn dispatch_emit(&self, channel: Channel, payload: &Value) -> BridgeResult<()> {
        let handlers: Vec<Arc<EmitHandler>> = {
            let table = self.handlers.read().map_err(|_| BridgeError::StatePoisoned)?;
            table.get(&channel).cloned().unwrap_or_default()
        };
        if handlers.is_empty() {
            tracing::trace!(%channel, "emit dropped: no handler registered");
            return Ok(());
        }
        for handler in handlers {
            handler(payload.clone());
        }
        Ok(())
    }

    async fn dispatch_request(
        &self,
        id: RequestId,
        channel: Channel,
        payload: Value,
    ) -> BridgeResult<()> {
        let responder = {
            let table = self
                .responders
                .read()
                .map_err(|_| BridgeError::StatePoisoned)?;
            table.get(&channel).cloned()
        };

        let outcome = match responder {
            Some(responder) => responder.respond(payload).await,
            None => Err(WireError::new(format!(
                "no responder registered for channel {channel}"
            ))
            .with_code("no-responder")),
        };

        let (status, response_payload) = match outcome {
            Ok(value) => (ResponseStatus::Success, value),
            Err(wire) => (ResponseStatus::Error, wire_to_payload(&wire)),
        };
        self.outbound
            .send(Envelope::Response {
                id,
                status,
                payload: response_payload,
            })
            .await?;
        Ok(())
    }

    fn settle_response(
        &self,
        id: RequestId,
        status: ResponseStatus,
        payload: Value,
    ) -> BridgeResult<()> {
        let sender = self
            .pending
            .lock()
            .map_err(|_| BridgeError::StatePoisoned)?
            .remove(&id);
        let Some(sender) = sender else {
            tracing::trace!(%id, "response ignored: no pending request for token");
            return Ok(());
        };

        let outcome = match status {
            ResponseStatus::Success => Ok(payload),
            ResponseStatus::Error => Err(WireError::from_payload(&payload)),
        };
        if sender.send(outcome).is_err() {
            tracing::trace!(%id, "response ignored: caller no longer waiting");
        }
        Ok(())
    }

    fn discard_pending(&self, id: RequestId) -> BridgeResult<()> {
        self.pending
            .lock()
            .map_err(|_| BridgeError::StatePoisoned)?
            .remove(&id);
        Ok(())
    }

    /// Spawns the pump task feeding inbound envelopes into the bridge.
    ///
    /// The task ends when the inbound channel closes, which happens when
    /// the peer context tears down its sending half.
    pub fn spawn_pump(
        bridge: Arc<Self>,
        mut inbound: mpsc::UnboundedReceiver<Envelope>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(envelope) = inbound.recv().await {
                if let Err(error) = bridge.handle_inbound(envelope).await {
                    tracing::warn!(%error, "inbound envelope handling failed");
                }
            }
        })
    }
}

impl fmt::Debug for MessageBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBridge")
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

/// Serialises a wire error for transmission, falling back to the bare
/// message when serialisation is impossible.
fn wire_to_payload(wire: &WireError) -> Value {
    serde_json::to_value(wire).unwrap_or_else(|_| Value::String(wire.message.clone()))
}
