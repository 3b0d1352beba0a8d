//! Domain types for login orchestration.

mod error;
mod passphrase;
mod security_token;
mod session;
mod settings;
mod trusted_domain;

pub use error::AuthDomainError;
pub use passphrase::Passphrase;
pub use security_token::SecurityToken;
pub use session::{
    AuthSession, CsrfToken, FailurePresentation, LoginState, ResultDelivery,
    TERMINAL_FAILURE_ATTEMPTS,
};
pub use settings::AccountSettings;
pub use trusted_domain::TrustedDomain;
