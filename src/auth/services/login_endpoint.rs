//! Bridge responder exposing the login flow on the login channel.

use std::sync::Arc;

use mockable::Clock;
use serde::Deserialize;
use serde_json::json;

use crate::auth::domain::{Passphrase, ResultDelivery};
use crate::auth::ports::{CryptoEngine, RemoteApi};
use crate::auth::services::{LoginCall, LoginService};
use crate::bridge::domain::{Channel, WireError};
use crate::bridge::error::BridgeResult;
use crate::bridge::services::{MessageBridge, responder_fn};
use crate::registry::domain::WorkerKey;

/// Wire shape accepted on the login channel.
#[derive(Debug, Deserialize)]
struct LoginPayload {
    passphrase: String,
    #[serde(default)]
    remember: bool,
    #[serde(default)]
    redirect_path: Option<String>,
    #[serde(default = "default_delivery")]
    delivery: ResultDelivery,
}

const fn default_delivery() -> ResultDelivery {
    ResultDelivery::Caller
}

/// Registers the login responder on a worker's bridge.
///
/// Requests carry `{passphrase, remember?, redirect_path?, delivery?}`.
/// With caller delivery the request resolves with the success message
/// and redirect URL or rejects with the normalised error; with
/// app-worker delivery the outcome is broadcast to the origin tab's
/// application worker and the request itself only acknowledges routing.
///
/// # Errors
///
/// Returns [`crate::bridge::error::BridgeError::StatePoisoned`] when the
/// bridge's responder table lock is poisoned.
pub fn attach_login_responder<E, A, C>(
    bridge: &MessageBridge,
    service: Arc<LoginService<E, A, C>>,
    origin: WorkerKey,
) -> BridgeResult<()>
where
    E: CryptoEngine + 'static,
    A: RemoteApi + 'static,
    C: Clock + Send + Sync + 'static,
{
    bridge.respond(
        Channel::AuthLogin,
        responder_fn(move |payload| {
            let service = Arc::clone(&service);
            async move {
                let parsed: LoginPayload = serde_json::from_value(payload)
                    .map_err(|err| WireError::new(err.to_string()).with_code("bad-request"))?;
                let passphrase = Passphrase::new(parsed.passphrase)
                    .map_err(|err| WireError::new(err.to_string()).with_code("validation"))?;

                let mut call = LoginCall::new(passphrase, origin, parsed.delivery)
                    .with_remember(parsed.remember);
                if let Some(path) = parsed.redirect_path {
                    call = call.with_redirect_path(path);
                }

                match (service.login(call).await, parsed.delivery) {
                    (Ok(success), ResultDelivery::Caller) => Ok(json!({
                        "status": "success",
                        "message": success.message(),
                        "redirect_url": success.redirect_url(),
                    })),
                    // With app-worker delivery the outcome has already
                    // been broadcast; the request just acknowledges.
                    (Ok(_) | Err(_), ResultDelivery::AppWorker) => {
                        Ok(json!({ "status": "routed" }))
                    }
                    (Err(error), ResultDelivery::Caller) => {
                        Err(WireError::new(error.to_string()).with_code(error.wire_code()))
                    }
                }
            }
        }),
    )
}
