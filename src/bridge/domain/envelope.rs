//! Wire envelopes exchanged between paired contexts.

use super::Channel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Correlation token pairing a request with its single response.
///
/// Identifiers are random UUIDs, so uniqueness for the lifetime of the
/// originating port holds by construction; callers cannot accidentally
/// reuse an in-flight token.
///
/// # Examples
///
/// ```
/// use vaultlink::bridge::domain::RequestId;
///
/// let id = RequestId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new random request identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a request identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `RequestId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for RequestId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome marker carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// The peer resolved the request; the payload is the result value.
    Success,
    /// The peer rejected the request; the payload is a serialised
    /// [`super::WireError`].
    Error,
}

/// A single message crossing a port.
///
/// Emits are fire-and-forget; requests are paired with exactly one
/// response bearing the same [`RequestId`]. Payloads are JSON values, the
/// structurally-cloneable subset that survives a context boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Envelope {
    /// Fire-and-forget broadcast; dropped silently when the peer has no
    /// handler registered for the channel.
    Emit {
        /// Target channel.
        channel: Channel,
        /// Structurally-cloneable event payload.
        payload: Value,
    },
    /// Correlated request awaiting a single response.
    Request {
        /// Correlation token, unique per originating port.
        id: RequestId,
        /// Target channel.
        channel: Channel,
        /// Structurally-cloneable request payload.
        payload: Value,
    },
    /// The single response settling a request.
    Response {
        /// Correlation token copied from the originating request.
        id: RequestId,
        /// Whether the request resolved or was rejected.
        status: ResponseStatus,
        /// Result value on success, serialised wire error on rejection.
        payload: Value,
    },
}

impl Envelope {
    /// Returns the channel for emits and requests, `None` for responses.
    #[must_use]
    pub const fn channel(&self) -> Option<Channel> {
        match self {
            Self::Emit { channel, .. } | Self::Request { channel, .. } => Some(*channel),
            Self::Response { .. } => None,
        }
    }
}
