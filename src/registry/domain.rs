//! Domain types for worker identity and addressing.

use crate::bridge::services::MessageBridge;
use crate::registry::error::ParseWorkerNameError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The closed set of worker kinds the extension attaches to a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerName {
    /// Worker driving the dedicated login form iframe.
    LoginForm,
    /// Primary application worker for the tab.
    App,
    /// Worker backing the quick-access popup.
    QuickAccess,
}

impl WorkerName {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginForm => "login-form",
            Self::App => "app",
            Self::QuickAccess => "quick-access",
        }
    }
}

impl TryFrom<&str> for WorkerName {
    type Error = ParseWorkerNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "login-form" => Ok(Self::LoginForm),
            "app" => Ok(Self::App),
            "quick-access" => Ok(Self::QuickAccess),
            other => Err(ParseWorkerNameError(other.to_owned())),
        }
    }
}

impl fmt::Display for WorkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Browser-assigned tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(u32);

impl TabId {
    /// Wraps a browser tab identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique worker address: at most one live worker exists per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerKey {
    /// Worker kind.
    pub name: WorkerName,
    /// Owning tab.
    pub tab_id: TabId,
}

impl WorkerKey {
    /// Creates a worker address.
    #[must_use]
    pub const fn new(name: WorkerName, tab_id: TabId) -> Self {
        Self { name, tab_id }
    }
}

impl fmt::Display for WorkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@tab-{}", self.name, self.tab_id)
    }
}

/// A live execution context and the bridge that reaches it.
#[derive(Clone)]
pub struct Worker {
    key: WorkerKey,
    bridge: Arc<MessageBridge>,
    attached_at: DateTime<Utc>,
}

impl Worker {
    /// Creates a worker entry for a freshly attached context.
    #[must_use]
    pub fn new(key: WorkerKey, bridge: Arc<MessageBridge>, clock: &impl Clock) -> Self {
        Self {
            key,
            bridge,
            attached_at: clock.utc(),
        }
    }

    /// Returns the worker address.
    #[must_use]
    pub const fn key(&self) -> WorkerKey {
        self.key
    }

    /// Returns the bridge handle for this worker's context.
    #[must_use]
    pub fn bridge(&self) -> Arc<MessageBridge> {
        Arc::clone(&self.bridge)
    }

    /// Returns the attachment timestamp.
    #[must_use]
    pub const fn attached_at(&self) -> DateTime<Utc> {
        self.attached_at
    }

    /// Returns whether this worker owns the given bridge instance.
    #[must_use]
    pub fn uses_bridge(&self, bridge: &Arc<MessageBridge>) -> bool {
        Arc::ptr_eq(&self.bridge, bridge)
    }
}

impl fmt::Debug for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Worker")
            .field("key", &self.key)
            .field("attached_at", &self.attached_at)
            .finish_non_exhaustive()
    }
}
