//! Shared world state for login flow BDD scenarios.

use std::sync::Arc;

use rstest::fixture;

use vaultlink::auth::domain::{Passphrase, ResultDelivery, TrustedDomain};
use vaultlink::auth::error::AuthResult;
use vaultlink::auth::services::{LoginCall, LoginService, LoginSuccess, RememberedPassphraseCache};
use vaultlink::registry::domain::{TabId, WorkerKey, WorkerName};
use vaultlink::registry::service::WorkerRegistry;

use crate::test_helpers::{ScriptedApi, ScriptedCrypto, TestClock};

/// Service type used by the BDD world.
pub type TestLoginService = LoginService<ScriptedCrypto, ScriptedApi, TestClock>;

/// Scenario world for login flow behaviour tests.
pub struct LoginWorld {
    pub service: Arc<TestLoginService>,
    pub crypto: Arc<ScriptedCrypto>,
    pub api: Arc<ScriptedApi>,
    pub clock: Arc<TestClock>,
    pub cache: Arc<RememberedPassphraseCache<TestClock>>,
    pub results: Vec<AuthResult<LoginSuccess>>,
}

impl LoginWorld {
    /// Creates a world wired over scripted collaborators.
    #[must_use]
    pub fn new() -> Self {
        let crypto = Arc::new(ScriptedCrypto::new());
        let api = Arc::new(ScriptedApi::new());
        let clock = Arc::new(TestClock::at_epoch());
        let cache = Arc::new(RememberedPassphraseCache::new(Arc::clone(&clock)));
        let registry = Arc::new(WorkerRegistry::new());
        let trusted_domain =
            TrustedDomain::new("https://vault.example.org").expect("domain should validate");
        let service = Arc::new(LoginService::new(
            Arc::clone(&crypto),
            Arc::clone(&api),
            registry,
            Arc::clone(&cache),
            trusted_domain,
        ));
        Self {
            service,
            crypto,
            api,
            clock,
            cache,
            results: Vec::new(),
        }
    }

    /// Runs one login attempt and records the outcome.
    pub fn attempt_login(&mut self, remember: bool, redirect_path: Option<String>) {
        let passphrase =
            Passphrase::new("correct horse battery staple").expect("passphrase should validate");
        let mut call = LoginCall::new(
            passphrase,
            WorkerKey::new(WorkerName::QuickAccess, TabId::new(1)),
            ResultDelivery::Caller,
        )
        .with_remember(remember);
        if let Some(path) = redirect_path {
            call = call.with_redirect_path(path);
        }
        let result = run_async(self.service.login(call));
        self.results.push(result);
    }

    /// Returns the most recent login outcome.
    pub fn last_result(&self) -> Option<&AuthResult<LoginSuccess>> {
        self.results.last()
    }
}

impl Default for LoginWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LoginWorld {
    LoginWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
