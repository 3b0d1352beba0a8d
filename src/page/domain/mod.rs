//! Domain types for the page boundary.

mod allowlist;
mod payload;

pub use allowlist::AllowList;
pub use payload::{MAX_PAYLOAD_BYTES, MAX_PAYLOAD_DEPTH, ensure_cloneable};
