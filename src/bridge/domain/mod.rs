//! Domain types for the message bridge.
//!
//! This module contains pure protocol types with no infrastructure
//! dependencies. All types are immutable after construction and
//! serialisable via serde.

mod channel;
mod envelope;
mod wire_error;

pub use channel::{Channel, ParseChannelError};
pub use envelope::{Envelope, RequestId, ResponseStatus};
pub use wire_error::WireError;
