//! Adapter implementations of the bridge transport port.

pub mod memory;
