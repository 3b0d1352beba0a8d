//! Trusted-domain value object and redirect joining.

use super::AuthDomainError;
use std::fmt;

/// The vault's trusted origin, e.g. `https://vault.example.org`.
///
/// Stored without a trailing slash. Redirect targets handed back to the
/// page are always absolute URLs under this origin; anything else is
/// replaced by the domain root so a page can never steer the user
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedDomain(String);

impl TrustedDomain {
    /// Creates a validated trusted domain.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidTrustedDomain`] when the value
    /// lacks an `http://` or `https://` scheme or has no host.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() && !host.contains('/') => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(AuthDomainError::InvalidTrustedDomain(raw)),
        }
    }

    /// Returns the origin without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a requested redirect path onto the trusted origin.
    ///
    /// A path that is missing or not rooted at `/` is replaced by the
    /// domain root.
    #[must_use]
    pub fn join_redirect(&self, path: Option<&str>) -> String {
        match path {
            Some(path) if path.starts_with('/') => format!("{}{path}", self.0),
            _ => format!("{}/", self.0),
        }
    }
}

impl fmt::Display for TrustedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
