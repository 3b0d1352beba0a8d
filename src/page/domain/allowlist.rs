//! Direction-specific channel allow-lists.

use crate::bridge::domain::Channel;

/// Fixed, direction-specific set of channels the page boundary relays.
///
/// Anything not listed is simply not relayed, in either direction. The
/// closed [`Channel`] enum already rules out unknown names; the allow-list
/// additionally rules out known channels the page has no business with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    page_to_extension: Vec<Channel>,
    extension_to_page: Vec<Channel>,
}

impl AllowList {
    /// Creates an allow-list from explicit direction sets.
    #[must_use]
    pub const fn new(page_to_extension: Vec<Channel>, extension_to_page: Vec<Channel>) -> Self {
        Self {
            page_to_extension,
            extension_to_page,
        }
    }

    /// The default surface exposed to the login page: the page may submit
    /// a login and announce readiness; the extension may push login
    /// progress and outcomes back.
    #[must_use]
    pub fn login_surface() -> Self {
        Self::new(
            vec![Channel::AuthLogin, Channel::PageReady],
            vec![
                Channel::AuthLoginProcessing,
                Channel::AuthAfterLoginSuccess,
                Channel::AuthAfterLoginFailure,
            ],
        )
    }

    /// Returns whether the page may send on the channel.
    #[must_use]
    pub fn allows_from_page(&self, channel: Channel) -> bool {
        self.page_to_extension.contains(&channel)
    }

    /// Returns whether the extension may push the channel to the page.
    #[must_use]
    pub fn allows_to_page(&self, channel: Channel) -> bool {
        self.extension_to_page.contains(&channel)
    }
}
