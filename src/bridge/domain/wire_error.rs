//! Boundary-safe error shape.
//!
//! Native error values do not survive a context boundary: stack traces and
//! type identity are lost in serialisation. Every error leaving a context
//! is therefore normalised to this structurally-cloneable shape before
//! transmission, and callers on the far side must not rely on anything
//! beyond it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The one error shape allowed to cross a context boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct WireError {
    /// Human-readable failure description.
    pub message: String,
    /// Optional machine-readable code driving caller policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl WireError {
    /// Creates a wire error with a message and no code.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Sets the machine-readable code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Normalises a native error into the boundary-safe shape.
    #[must_use]
    pub fn from_error(error: &(impl std::error::Error + ?Sized)) -> Self {
        Self::new(error.to_string())
    }

    /// Reconstructs a wire error from a response payload.
    ///
    /// Payloads produced by well-behaved peers deserialise directly; any
    /// other value is folded into the message so the caller still sees a
    /// usable description.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        serde_json::from_value(payload.clone())
            .unwrap_or_else(|_| Self::new(payload.to_string()))
    }
}
