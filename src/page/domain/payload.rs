//! Defensive structural-cloneability checks for boundary payloads.
//!
//! The browser transport serialises payloads when they cross contexts, so
//! function values and live object references can never arrive here; what
//! can arrive is a hostile page feeding pathological JSON. The bounds
//! below reject payloads deep or large enough to degrade the extension
//! side before they are relayed.

use crate::page::error::PayloadError;
use serde_json::Value;

/// Maximum nesting depth accepted at the page boundary.
pub const MAX_PAYLOAD_DEPTH: usize = 16;

/// Maximum serialised size in bytes accepted at the page boundary.
pub const MAX_PAYLOAD_BYTES: usize = 64 * 1024;

/// Validates that a payload is safe to relay across the page boundary.
///
/// # Errors
///
/// Returns [`PayloadError::TooDeep`] when nesting exceeds
/// [`MAX_PAYLOAD_DEPTH`], [`PayloadError::TooLarge`] when the serialised
/// form exceeds [`MAX_PAYLOAD_BYTES`], and
/// [`PayloadError::Unserialisable`] when the value cannot be serialised
/// at all.
pub fn ensure_cloneable(payload: &Value) -> Result<(), PayloadError> {
    let depth = nesting_depth(payload);
    if depth > MAX_PAYLOAD_DEPTH {
        return Err(PayloadError::TooDeep {
            depth,
            max: MAX_PAYLOAD_DEPTH,
        });
    }
    let bytes = serde_json::to_string(payload)
        .map_err(|err| PayloadError::Unserialisable(err.to_string()))?
        .len();
    if bytes > MAX_PAYLOAD_BYTES {
        return Err(PayloadError::TooLarge {
            bytes,
            max: MAX_PAYLOAD_BYTES,
        });
    }
    Ok(())
}

fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => 1,
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(fields) => 1 + fields.values().map(nesting_depth).max().unwrap_or(0),
    }
}
