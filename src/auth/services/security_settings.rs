//! Config-store helpers for the security token and trusted domain.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::domain::{AuthDomainError, SecurityToken, TrustedDomain};
use crate::auth::error::AuthResult;
use crate::auth::ports::{ConfigKey, ConfigStore};

/// Storage shape for the security token.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSecurityToken {
    code: String,
    background_colour: String,
    text_colour: String,
}

/// Reads and writes validated vault settings through the config store.
///
/// The store is an external collaborator, so stored values are validated
/// on the way out, every time.
pub struct SecuritySettingsService<S>
where
    S: ConfigStore,
{
    store: Arc<S>,
}

impl<S> SecuritySettingsService<S>
where
    S: ConfigStore,
{
    /// Creates a service over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the stored security token, if one has been configured.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidSecurityToken`] when the stored
    /// value is malformed, or a config-store error when it cannot be
    /// read.
    pub async fn security_token(&self) -> AuthResult<Option<SecurityToken>> {
        let Some(value) = self.store.read(ConfigKey::SecurityToken).await? else {
            return Ok(None);
        };
        let stored: StoredSecurityToken = serde_json::from_value(value)
            .map_err(|err| AuthDomainError::InvalidSecurityToken(err.to_string()))?;
        let token =
            SecurityToken::new(stored.code, stored.background_colour, stored.text_colour)?;
        Ok(Some(token))
    }

    /// Persists the security token.
    ///
    /// # Errors
    ///
    /// Returns a config-store error when the value cannot be written.
    pub async fn set_security_token(&self, token: &SecurityToken) -> AuthResult<()> {
        let value = json!({
            "code": token.code(),
            "background_colour": token.background_colour(),
            "text_colour": token.text_colour(),
        });
        self.store.write(ConfigKey::SecurityToken, value).await?;
        Ok(())
    }

    /// Returns the stored trusted domain, if one has been configured.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::InvalidTrustedDomain`] when the stored
    /// value is malformed, or a config-store error when it cannot be
    /// read.
    pub async fn trusted_domain(&self) -> AuthResult<Option<TrustedDomain>> {
        let Some(value) = self.store.read(ConfigKey::TrustedDomain).await? else {
            return Ok(None);
        };
        let raw: String = serde_json::from_value(value)
            .map_err(|err| AuthDomainError::InvalidTrustedDomain(err.to_string()))?;
        Ok(Some(TrustedDomain::new(raw)?))
    }

    /// Persists the trusted domain.
    ///
    /// # Errors
    ///
    /// Returns a config-store error when the value cannot be written.
    pub async fn set_trusted_domain(&self, domain: &TrustedDomain) -> AuthResult<()> {
        self.store
            .write(ConfigKey::TrustedDomain, json!(domain.as_str()))
            .await?;
        Ok(())
    }
}
