//! Allow-listed relay guarding the untrusted page boundary.
//!
//! The page bridge is the privilege-escalation containment point: the
//! untrusted page can only trigger behaviours explicitly exposed by the
//! allow-list, in the direction the allow-list grants. Payloads crossing
//! the boundary must be structurally cloneable; the relay checks this
//! itself rather than trusting the transport to enforce it.

pub mod domain;
pub mod error;
pub mod services;

pub use domain::{AllowList, MAX_PAYLOAD_BYTES, MAX_PAYLOAD_DEPTH, ensure_cloneable};
pub use error::{PageBridgeError, PageBridgeResult, PayloadError};
pub use services::{PageRelay, RelayOutcome};
