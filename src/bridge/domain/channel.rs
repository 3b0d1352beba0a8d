//! Closed set of message channels and their dotted wire names.
//!
//! Channels replace the stringly-typed event names of conventional
//! extension messaging with a discriminated union: every channel the
//! system speaks is a variant here, and dispatch is keyed on the variant
//! rather than on arbitrary strings. Wire names follow the
//! `<product>.<domain>.<action>` convention so serialised traffic stays
//! self-describing.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A message channel understood by the bridge.
///
/// # Examples
///
/// ```
/// use vaultlink::bridge::domain::Channel;
///
/// assert_eq!(Channel::AuthLogin.as_str(), "vault.auth.login");
/// assert_eq!(Channel::try_from("vault.auth.login"), Ok(Channel::AuthLogin));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Correlated login request from a worker to the background controller.
    AuthLogin,
    /// Broadcast telling a tab's application worker that a login submitted
    /// from its login form is in progress.
    AuthLoginProcessing,
    /// Broadcast carrying the human-readable success message and the
    /// absolute redirect URL after a routed login completes.
    AuthAfterLoginSuccess,
    /// Broadcast carrying the failure message after a routed login fails.
    AuthAfterLoginFailure,
    /// Correlated query for whether a multi-factor step is still pending.
    AuthIsMfaRequired,
    /// Correlated request to synchronise account settings from the API.
    SettingsSync,
    /// Emit from the untrusted page signalling its scripts have attached.
    PageReady,
}

impl Channel {
    /// Returns the canonical dotted wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthLogin => "vault.auth.login",
            Self::AuthLoginProcessing => "vault.auth.login-processing",
            Self::AuthAfterLoginSuccess => "vault.auth.after-login-success",
            Self::AuthAfterLoginFailure => "vault.auth.after-login-failure",
            Self::AuthIsMfaRequired => "vault.auth.is-mfa-required",
            Self::SettingsSync => "vault.settings.sync",
            Self::PageReady => "vault.page.ready",
        }
    }
}

impl TryFrom<&str> for Channel {
    type Error = ParseChannelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "vault.auth.login" => Ok(Self::AuthLogin),
            "vault.auth.login-processing" => Ok(Self::AuthLoginProcessing),
            "vault.auth.after-login-success" => Ok(Self::AuthAfterLoginSuccess),
            "vault.auth.after-login-failure" => Ok(Self::AuthAfterLoginFailure),
            "vault.auth.is-mfa-required" => Ok(Self::AuthIsMfaRequired),
            "vault.settings.sync" => Ok(Self::SettingsSync),
            "vault.page.ready" => Ok(Self::PageReady),
            other => Err(ParseChannelError(other.to_owned())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::try_from(name.as_str()).map_err(D::Error::custom)
    }
}

/// Error returned while parsing channel names from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown channel: {0}")]
pub struct ParseChannelError(pub String);
