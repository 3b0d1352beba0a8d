//! Account settings synchronised from the remote API.

use serde::{Deserialize, Serialize};

/// User-account settings fetched during login.
///
/// When the sync step fails these built-in defaults are substituted so
/// login can still complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Interface locale, e.g. `en`.
    pub locale: String,
    /// Minutes of inactivity before the vault locks itself.
    pub auto_lock_minutes: u32,
    /// Whether copying a credential raises a desktop notification.
    pub copy_notifications: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
            auto_lock_minutes: 15,
            copy_notifications: true,
        }
    }
}
