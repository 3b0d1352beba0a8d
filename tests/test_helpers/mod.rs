//! Shared collaborator doubles for integration tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use vaultlink::auth::domain::{AccountSettings, CsrfToken, Passphrase};
use vaultlink::auth::ports::{
    CryptoEngine, CryptoError, CryptoResult, RemoteApi, RemoteApiError, RemoteApiResult,
};

/// Manually-advanced clock for TTL behaviour.
#[derive(Debug)]
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    /// Creates a clock pinned to the Unix epoch.
    #[must_use]
    pub fn at_epoch() -> Self {
        Self {
            now: Mutex::new(DateTime::<Utc>::UNIX_EPOCH),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("test clock lock should not poison");
        *now += delta;
    }
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("test clock lock should not poison")
    }
}

/// Crypto engine double whose login outcome is switchable per scenario.
#[derive(Debug, Default)]
pub struct ScriptedCrypto {
    reject_passphrase: AtomicBool,
}

impl ScriptedCrypto {
    /// Creates an engine that accepts every passphrase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent logins fail with an invalid-passphrase error.
    pub fn reject_passphrase(&self, reject: bool) {
        self.reject_passphrase.store(reject, Ordering::SeqCst);
    }
}

#[async_trait]
impl CryptoEngine for ScriptedCrypto {
    async fn verify(&self) -> CryptoResult<()> {
        Ok(())
    }

    async fn login(&self, _passphrase: &Passphrase) -> CryptoResult<()> {
        if self.reject_passphrase.load(Ordering::SeqCst) {
            Err(CryptoError::InvalidPassphrase)
        } else {
            Ok(())
        }
    }
}

/// Remote API double with switchable MFA and settings behaviour.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    mfa_required: AtomicBool,
    fail_settings: AtomicBool,
}

impl ScriptedApi {
    /// Creates an API where MFA is satisfied and settings sync works.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a further multi-factor step as pending.
    pub fn require_mfa(&self, required: bool) {
        self.mfa_required.store(required, Ordering::SeqCst);
    }

    /// Makes the settings sync step fail.
    pub fn fail_settings(&self, fail: bool) {
        self.fail_settings.store(fail, Ordering::SeqCst);
    }

    /// The settings served when sync succeeds, distinct from defaults.
    #[must_use]
    pub fn synced_settings() -> AccountSettings {
        AccountSettings {
            locale: "fr".to_owned(),
            auto_lock_minutes: 5,
            copy_notifications: false,
        }
    }
}

#[async_trait]
impl RemoteApi for ScriptedApi {
    async fn retrieve_csrf_token(&self) -> RemoteApiResult<CsrfToken> {
        Ok(CsrfToken::new("csrf-test"))
    }

    async fn is_mfa_required(&self) -> RemoteApiResult<bool> {
        Ok(self.mfa_required.load(Ordering::SeqCst))
    }

    async fn sync_settings(&self) -> RemoteApiResult<AccountSettings> {
        if self.fail_settings.load(Ordering::SeqCst) {
            Err(RemoteApiError::Unreachable(
                "settings endpoint down".to_owned(),
            ))
        } else {
            Ok(Self::synced_settings())
        }
    }
}
