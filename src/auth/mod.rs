//! Login orchestration over the message bridge.
//!
//! Sequences the multi-step login: CSRF retrieval, passphrase
//! verification, the multi-factor check, and settings synchronisation,
//! with partial-failure tolerance on the settings step and explicit
//! result delivery back to the caller or the tab's application worker.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`] (sessions, passphrases, trusted domains)
//! - Port contracts in [`ports`] (crypto engine, remote API, config store)
//! - Adapter implementations in [`adapters`] (in-memory config store)
//! - Orchestration in [`services`] (login flow, passphrase cache)

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
