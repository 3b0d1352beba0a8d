//! Passphrase value object with redacted diagnostics.

use super::AuthDomainError;
use std::fmt;

/// The user's vault passphrase.
///
/// Held only in memory. The `Debug` representation is redacted so the
/// secret cannot leak through logs or assertion output.
#[derive(Clone, PartialEq, Eq)]
pub struct Passphrase(String);

impl Passphrase {
    /// Creates a passphrase.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyPassphrase`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AuthDomainError::EmptyPassphrase);
        }
        Ok(Self(raw))
    }

    /// Exposes the secret for submission to the crypto engine.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}
