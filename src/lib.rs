//! Vaultlink: cross-context messaging core for a credential-manager
//! browser extension.
//!
//! This crate provides the privileged-side plumbing that lets isolated
//! execution contexts (an untrusted page, named workers bound to browser
//! tabs, and a background controller) exchange typed, correlated requests
//! and events, and the login orchestration built on top of it.
//!
//! # Architecture
//!
//! Vaultlink follows hexagonal architecture principles:
//!
//! - **Domain**: Pure protocol and authentication types with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//!   (transport, crypto engine, remote API, configuration store)
//! - **Adapters**: Concrete implementations of ports (in-memory transport,
//!   in-memory configuration)
//!
//! # Modules
//!
//! - [`bridge`]: Typed channels and the emit/request message bridge
//! - [`registry`]: Directory of addressable worker contexts
//! - [`page`]: Allow-listed relay guarding the untrusted page boundary
//! - [`auth`]: Login state machine and remembered-passphrase cache

pub mod auth;
pub mod bridge;
pub mod page;
pub mod registry;
