//! Login state machine orchestration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use mockable::Clock;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::auth::domain::{
    AccountSettings, AuthSession, FailurePresentation, Passphrase, ResultDelivery, TrustedDomain,
};
use crate::auth::error::{AuthError, AuthResult};
use crate::auth::ports::{CryptoEngine, CryptoError, RemoteApi};
use crate::auth::services::RememberedPassphraseCache;
use crate::bridge::domain::Channel;
use crate::registry::domain::{WorkerKey, WorkerName};
use crate::registry::service::WorkerRegistry;

/// One login invocation: the secret, the caller's choices, and where the
/// outcome goes.
#[derive(Debug, Clone)]
pub struct LoginCall {
    passphrase: Passphrase,
    remember: bool,
    redirect_path: Option<String>,
    origin: WorkerKey,
    delivery: ResultDelivery,
}

impl LoginCall {
    /// Creates a login call with no remembering and no redirect.
    #[must_use]
    pub const fn new(passphrase: Passphrase, origin: WorkerKey, delivery: ResultDelivery) -> Self {
        Self {
            passphrase,
            remember: false,
            redirect_path: None,
            origin,
            delivery,
        }
    }

    /// Requests that the passphrase be remembered after verification.
    #[must_use]
    pub const fn with_remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }

    /// Sets the relative redirect path requested by the page.
    #[must_use]
    pub fn with_redirect_path(mut self, path: impl Into<String>) -> Self {
        self.redirect_path = Some(path.into());
        self
    }

    /// Returns where the outcome will be delivered.
    #[must_use]
    pub const fn delivery(&self) -> ResultDelivery {
        self.delivery
    }

    /// Returns the worker that initiated the login.
    #[must_use]
    pub const fn origin(&self) -> WorkerKey {
        self.origin
    }
}

/// A completed login: the final session record plus what the UI shows.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    session: AuthSession,
    message: String,
    redirect_url: String,
}

impl LoginSuccess {
    /// Returns the final session record.
    #[must_use]
    pub const fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Returns the human-readable success message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the absolute redirect URL under the trusted domain.
    #[must_use]
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }
}

/// Sequences the login steps against the external collaborators.
///
/// Attempts are serialized by a single-flight guard: a second `login`
/// call waits for the first to settle before it starts, so concurrent
/// attempts cannot race on the passphrase cache or on result routing.
pub struct LoginService<E, A, C>
where
    E: CryptoEngine,
    A: RemoteApi,
    C: Clock + Send + Sync,
{
    crypto: Arc<E>,
    api: Arc<A>,
    registry: Arc<WorkerRegistry>,
    cache: Arc<RememberedPassphraseCache<C>>,
    trusted_domain: TrustedDomain,
    attempts: StdMutex<HashMap<WorkerKey, u32>>,
    flight: Mutex<()>,
}

impl<E, A, C> LoginService<E, A, C>
where
    E: CryptoEngine,
    A: RemoteApi,
    C: Clock + Send + Sync,
{
    /// Creates a login service over the given collaborators.
    #[must_use]
    pub fn new(
        crypto: Arc<E>,
        api: Arc<A>,
        registry: Arc<WorkerRegistry>,
        cache: Arc<RememberedPassphraseCache<C>>,
        trusted_domain: TrustedDomain,
    ) -> Self {
        Self {
            crypto,
            api,
            registry,
            cache,
            trusted_domain,
            attempts: StdMutex::new(HashMap::new()),
            flight: Mutex::new(()),
        }
    }

    /// Runs the full login flow and delivers the outcome.
    ///
    /// With [`ResultDelivery::AppWorker`] the outcome is also broadcast
    /// to the origin tab's application worker; the returned value then
    /// serves as the acknowledgement for the originating request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when any mandatory step fails. Settings
    /// sync is not mandatory: its failure substitutes defaults and the
    /// flow still succeeds.
    pub async fn login(&self, call: LoginCall) -> AuthResult<LoginSuccess> {
        let _flight = self.flight.lock().await;

        if call.delivery == ResultDelivery::AppWorker {
            self.notify_processing(call.origin).await;
        }

        let mut session = AuthSession::new(call.origin, call.remember);
        match self.run_steps(&mut session, &call).await {
            Ok(()) => {
                session.record_success();
                let redirect_url = self
                    .trusted_domain
                    .join_redirect(call.redirect_path.as_deref());
                let success = LoginSuccess {
                    session,
                    message: "Vault unlocked.".to_owned(),
                    redirect_url,
                };
                info!(origin = %call.origin, "login succeeded");
                if call.delivery == ResultDelivery::AppWorker {
                    self.route_success(call.origin, &success).await;
                }
                Ok(success)
            }
            Err(error) => {
                session.record_failure();
                warn!(origin = %call.origin, error = %error, "login failed");
                if call.delivery == ResultDelivery::AppWorker {
                    self.route_failure(call.origin, &error).await;
                }
                Err(error)
            }
        }
    }

    async fn run_steps(&self, session: &mut AuthSession, call: &LoginCall) -> AuthResult<()> {
        let token = self.api.retrieve_csrf_token().await?;
        session.record_csrf(token);

        self.crypto.verify().await?;
        match self.crypto.login(&call.passphrase).await {
            Ok(()) => {
                self.reset_attempts(call.origin)?;
                session.record_verified();
            }
            Err(CryptoError::InvalidPassphrase) => {
                let attempts = self.bump_attempts(call.origin)?;
                return Err(AuthError::InvalidPassphrase {
                    attempts,
                    presentation: FailurePresentation::for_attempts(attempts),
                });
            }
            Err(other) => return Err(other.into()),
        }

        // Remembering is tied to verification alone; later step failures
        // must not undo it.
        if call.remember {
            self.cache.store(call.passphrase.clone()).await;
        }

        // The login form delegates the multi-factor check to the remote
        // API's own redirect behaviour; every other origin checks here.
        if call.origin.name == WorkerName::LoginForm {
            session.record_mfa_checked(false);
        } else {
            if self.api.is_mfa_required().await? {
                return Err(AuthError::MfaRequired);
            }
            session.record_mfa_checked(true);
        }

        match self.api.sync_settings().await {
            Ok(settings) => session.record_settings(settings, true),
            Err(error) => {
                // Intentionally non-fatal: login completes on defaults.
                warn!(error = %error, "settings sync failed, substituting defaults");
                session.record_settings(AccountSettings::default(), false);
            }
        }

        Ok(())
    }

    /// Tells the origin tab's application worker that a login is in
    /// progress. Best effort: a missing worker is logged, not fatal.
    async fn notify_processing(&self, origin: WorkerKey) {
        self.emit_to_app_worker(origin, Channel::AuthLoginProcessing, json!({}))
            .await;
    }

    async fn route_success(&self, origin: WorkerKey, success: &LoginSuccess) {
        self.emit_to_app_worker(
            origin,
            Channel::AuthAfterLoginSuccess,
            json!({
                "message": success.message,
                "redirect_url": success.redirect_url,
            }),
        )
        .await;
    }

    async fn route_failure(&self, origin: WorkerKey, error: &AuthError) {
        self.emit_to_app_worker(
            origin,
            Channel::AuthAfterLoginFailure,
            json!({
                "message": error.to_string(),
                "code": error.wire_code(),
            }),
        )
        .await;
    }

    async fn emit_to_app_worker(
        &self,
        origin: WorkerKey,
        channel: Channel,
        payload: serde_json::Value,
    ) {
        let worker = match self.registry.get(WorkerName::App, origin.tab_id) {
            Ok(worker) => worker,
            Err(error) => {
                warn!(%origin, %channel, error = %error, "no application worker to notify");
                return;
            }
        };
        if let Err(error) = worker.bridge().emit(channel, payload).await {
            warn!(%origin, %channel, error = %error, "failed to notify application worker");
        }
    }

    fn bump_attempts(&self, origin: WorkerKey) -> AuthResult<u32> {
        let mut attempts = self.attempts.lock().map_err(|_| AuthError::StatePoisoned)?;
        let count = attempts.entry(origin).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    fn reset_attempts(&self, origin: WorkerKey) -> AuthResult<()> {
        let mut attempts = self.attempts.lock().map_err(|_| AuthError::StatePoisoned)?;
        attempts.remove(&origin);
        Ok(())
    }
}
