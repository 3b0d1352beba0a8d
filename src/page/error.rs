//! Error types for the page boundary.

use crate::bridge::error::BridgeError;
use thiserror::Error;

/// Rejection reasons for payloads arriving at the page boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// Nesting exceeds the relay's depth bound.
    #[error("payload nesting depth {depth} exceeds the maximum of {max}")]
    TooDeep {
        /// Observed nesting depth.
        depth: usize,
        /// Maximum permitted depth.
        max: usize,
    },
    /// Serialised form exceeds the relay's size bound.
    #[error("payload of {bytes} bytes exceeds the maximum of {max} bytes")]
    TooLarge {
        /// Observed serialised size in bytes.
        bytes: usize,
        /// Maximum permitted size in bytes.
        max: usize,
    },
    /// The payload could not be serialised at all.
    #[error("payload could not be serialised: {0}")]
    Unserialisable(String),
}

/// Errors surfaced while relaying messages across the page boundary.
#[derive(Debug, Error)]
pub enum PageBridgeError {
    /// The payload failed the boundary's structural checks.
    #[error(transparent)]
    Payload(#[from] PayloadError),
    /// The underlying bridge refused or failed the operation.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Convenience alias for page boundary results.
pub type PageBridgeResult<T> = Result<T, PageBridgeError>;
