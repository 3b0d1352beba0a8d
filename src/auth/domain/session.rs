//! Login session state machine and delivery policy types.

use crate::registry::domain::WorkerKey;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::AccountSettings;

/// Passphrase failures at or above this count switch the caller to the
/// terminal failure view.
pub const TERMINAL_FAILURE_ATTEMPTS: u32 = 3;

/// Server-issued anti-forgery token required before the login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wraps a server-issued token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Login progress, strictly sequential on the happy path.
///
/// Any step's failure transitions directly to `Failed`, except settings
/// sync, which falls back to defaults and proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    /// No step has run yet.
    Init,
    /// A fresh CSRF token was retrieved.
    CsrfFetched,
    /// The passphrase verified against the user's key material.
    Verified,
    /// The multi-factor check passed or was not applicable.
    MfaChecked,
    /// Account settings were synchronised or defaulted.
    SettingsSynced,
    /// Login completed.
    Success,
    /// A step failed.
    Failed,
}

impl fmt::Display for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Init => "init",
            Self::CsrfFetched => "csrf-fetched",
            Self::Verified => "verified",
            Self::MfaChecked => "mfa-checked",
            Self::SettingsSynced => "settings-synced",
            Self::Success => "success",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Where the login outcome is delivered.
///
/// Passed explicitly by the caller rather than inferred from which
/// worker issued the login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultDelivery {
    /// Resolve or reject the originating request directly.
    Caller,
    /// Broadcast the outcome to the origin tab's application worker.
    AppWorker,
}

/// UI policy for a failed passphrase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePresentation {
    /// Show an inline "invalid passphrase" indication.
    Inline,
    /// Switch to the terminal failure view.
    Terminal,
}

impl FailurePresentation {
    /// Selects the presentation for the given consecutive-failure count.
    #[must_use]
    pub const fn for_attempts(attempts: u32) -> Self {
        if attempts >= TERMINAL_FAILURE_ATTEMPTS {
            Self::Terminal
        } else {
            Self::Inline
        }
    }
}

/// Ephemeral record of one login flow. Never persisted.
///
/// The passphrase itself is not retained here; it lives only on the call
/// stack and, when remembering was requested, in the passphrase cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    state: LoginState,
    origin: WorkerKey,
    remember: bool,
    csrf_token: Option<CsrfToken>,
    mfa_satisfied: bool,
    settings_synced: bool,
    settings: AccountSettings,
}

impl AuthSession {
    /// Opens a session in the initial state.
    #[must_use]
    pub fn new(origin: WorkerKey, remember: bool) -> Self {
        Self {
            state: LoginState::Init,
            origin,
            remember,
            csrf_token: None,
            mfa_satisfied: false,
            settings_synced: false,
            settings: AccountSettings::default(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Returns the worker that initiated the login.
    #[must_use]
    pub const fn origin(&self) -> WorkerKey {
        self.origin
    }

    /// Returns whether the caller asked to remember the passphrase.
    #[must_use]
    pub const fn remember(&self) -> bool {
        self.remember
    }

    /// Returns the CSRF token retrieved for this flow, if any.
    #[must_use]
    pub const fn csrf_token(&self) -> Option<&CsrfToken> {
        self.csrf_token.as_ref()
    }

    /// Returns whether the multi-factor check passed or was skipped.
    #[must_use]
    pub const fn mfa_satisfied(&self) -> bool {
        self.mfa_satisfied
    }

    /// Returns whether settings came from the API rather than defaults.
    #[must_use]
    pub const fn settings_synced(&self) -> bool {
        self.settings_synced
    }

    /// Returns the settings in effect for this session.
    #[must_use]
    pub const fn settings(&self) -> &AccountSettings {
        &self.settings
    }

    /// Records the retrieved CSRF token.
    pub fn record_csrf(&mut self, token: CsrfToken) {
        self.csrf_token = Some(token);
        self.state = LoginState::CsrfFetched;
    }

    /// Records successful passphrase verification.
    pub fn record_verified(&mut self) {
        self.state = LoginState::Verified;
    }

    /// Records the multi-factor check outcome.
    pub fn record_mfa_checked(&mut self, satisfied: bool) {
        self.mfa_satisfied = satisfied;
        self.state = LoginState::MfaChecked;
    }

    /// Records the settings in effect, noting whether they were synced
    /// from the API or substituted defaults.
    pub fn record_settings(&mut self, settings: AccountSettings, synced: bool) {
        self.settings = settings;
        self.settings_synced = synced;
        self.state = LoginState::SettingsSynced;
    }

    /// Marks the flow complete.
    pub fn record_success(&mut self) {
        self.state = LoginState::Success;
    }

    /// Marks the flow failed.
    pub fn record_failure(&mut self) {
        self.state = LoginState::Failed;
    }
}
