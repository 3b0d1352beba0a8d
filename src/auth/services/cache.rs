//! Time-bounded cache for an opted-in remembered passphrase.

use crate::auth::domain::Passphrase;
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Default remember window in seconds.
pub const DEFAULT_REMEMBER_TTL_SECONDS: i64 = 300;

#[derive(Debug, Clone)]
struct CachedEntry {
    passphrase: Passphrase,
    stored_at: DateTime<Utc>,
}

/// Single-slot, clock-injected cache for the remembered passphrase.
///
/// The extension serves one vault account, so one slot suffices. Entries
/// exist only when the user opted in at login and are evicted lazily on
/// the first read past the TTL.
#[derive(Debug)]
pub struct RememberedPassphraseCache<C>
where
    C: Clock + Send + Sync,
{
    slot: Mutex<Option<CachedEntry>>,
    ttl: Duration,
    clock: Arc<C>,
}

impl<C> RememberedPassphraseCache<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty cache with the default TTL.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl: Duration::seconds(DEFAULT_REMEMBER_TTL_SECONDS),
            clock,
        }
    }

    /// Overrides the TTL.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the configured TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Stores the passphrase, replacing any prior entry and restarting
    /// the TTL window.
    pub async fn store(&self, passphrase: Passphrase) {
        let mut slot = self.slot.lock().await;
        *slot = Some(CachedEntry {
            passphrase,
            stored_at: self.clock.utc(),
        });
    }

    /// Returns the remembered passphrase, if present and not expired.
    ///
    /// An expired entry is evicted on this read.
    pub async fn read(&self) -> Option<Passphrase> {
        let mut slot = self.slot.lock().await;
        match slot.as_ref() {
            Some(entry) if self.clock.utc() - entry.stored_at < self.ttl => {
                Some(entry.passphrase.clone())
            }
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    /// Discards any remembered passphrase.
    pub async fn clear(&self) {
        let mut slot = self.slot.lock().await;
        *slot = None;
    }
}
