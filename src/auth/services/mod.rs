//! Login orchestration services.

mod cache;
mod login;
mod login_endpoint;
mod security_settings;

pub use cache::{DEFAULT_REMEMBER_TTL_SECONDS, RememberedPassphraseCache};
pub use login::{LoginCall, LoginService, LoginSuccess};
pub use login_endpoint::attach_login_responder;
pub use security_settings::SecuritySettingsService;
