//! Services guarding the page boundary.

mod relay;

pub use relay::{PageRelay, RelayOutcome};
