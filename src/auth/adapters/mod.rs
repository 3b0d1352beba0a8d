//! Adapter implementations of the login ports.

pub mod memory;
