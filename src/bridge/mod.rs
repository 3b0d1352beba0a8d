//! Bidirectional pub/sub and correlated request/response messaging.
//!
//! Each execution context owns one [`services::MessageBridge`] paired with
//! a transport port to its peer context. The bridge offers two symmetric
//! primitives: fire-and-forget emits dispatched to every locally-registered
//! handler, and correlated requests that settle exactly once with either a
//! success payload or a normalised [`domain::WireError`].
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`] (channels, envelopes, wire errors)
//! - Port contracts in [`ports`] (the transport abstraction)
//! - Adapter implementations in [`adapters`] (in-memory duplex transport)
//! - The bridge itself in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
