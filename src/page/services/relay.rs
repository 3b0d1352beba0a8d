//! Channel-gated relay between a web page and the extension contexts.
//!
//! The relay owns two bridges, one facing the page and one facing the
//! extension, and forwards traffic between them only when the channel is
//! allow-listed for that direction. Blocked traffic is dropped without
//! error so a hostile page learns nothing from probing.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::bridge::domain::Channel;
use crate::bridge::services::MessageBridge;
use crate::page::domain::{AllowList, ensure_cloneable};
use crate::page::error::PageBridgeResult;

/// Outcome of a relay attempt across the page boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The message was forwarded to the other side.
    Relayed,
    /// The channel is not allow-listed for this direction; nothing was
    /// forwarded.
    Blocked,
}

/// Forwards allow-listed traffic between a page-facing bridge and an
/// extension-facing bridge.
#[derive(Debug)]
pub struct PageRelay {
    page_bridge: Arc<MessageBridge>,
    extension_bridge: Arc<MessageBridge>,
    allow_list: AllowList,
}

impl PageRelay {
    /// Creates a relay joining the two bridges under the given allow list.
    #[must_use]
    pub fn new(
        page_bridge: Arc<MessageBridge>,
        extension_bridge: Arc<MessageBridge>,
        allow_list: AllowList,
    ) -> Self {
        Self {
            page_bridge,
            extension_bridge,
            allow_list,
        }
    }

    /// Returns the allow list governing this relay.
    #[must_use]
    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Forwards a page-originated emit towards the extension.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload fails the boundary checks or
    /// the extension-facing transport fails.
    pub async fn relay_to_extension(
        &self,
        channel: Channel,
        payload: Value,
    ) -> PageBridgeResult<RelayOutcome> {
        if !self.allow_list.allows_from_page(channel) {
            warn!(%channel, "dropping page message on non-allow-listed channel");
            return Ok(RelayOutcome::Blocked);
        }
        ensure_cloneable(&payload)?;
        self.extension_bridge.emit(channel, payload).await?;
        debug!(%channel, "relayed page message to extension");
        Ok(RelayOutcome::Relayed)
    }

    /// Forwards an extension-originated emit towards the page.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload fails the boundary checks or
    /// the page-facing transport fails.
    pub async fn relay_to_page(
        &self,
        channel: Channel,
        payload: Value,
    ) -> PageBridgeResult<RelayOutcome> {
        if !self.allow_list.allows_to_page(channel) {
            warn!(%channel, "dropping extension message on non-allow-listed channel");
            return Ok(RelayOutcome::Blocked);
        }
        ensure_cloneable(&payload)?;
        self.page_bridge.emit(channel, payload).await?;
        debug!(%channel, "relayed extension message to page");
        Ok(RelayOutcome::Relayed)
    }

    /// Issues a page-originated request towards the extension and waits
    /// for the correlated response.
    ///
    /// Requests on channels the page may not use are blocked before any
    /// traffic leaves the boundary; the caller sees `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload fails the boundary checks, the
    /// extension rejects the request, or the response times out.
    pub async fn request_from_page(
        &self,
        channel: Channel,
        payload: Value,
    ) -> PageBridgeResult<Option<Value>> {
        if !self.allow_list.allows_from_page(channel) {
            warn!(%channel, "refusing page request on non-allow-listed channel");
            return Ok(None);
        }
        ensure_cloneable(&payload)?;
        let response = self.extension_bridge.request(channel, payload).await?;
        Ok(Some(response))
    }
}
