//! Port contracts for the message bridge.

pub mod transport;

pub use transport::{MessagePort, TransportError, TransportResult};
