//! Then steps for login flow BDD scenarios.

use rstest_bdd_macros::then;

use super::world::{LoginWorld, run_async};
use vaultlink::auth::domain::{AccountSettings, FailurePresentation, LoginState};
use vaultlink::auth::error::AuthError;

#[then("the login succeeds")]
fn login_succeeds(world: &LoginWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result()
        .ok_or_else(|| eyre::eyre!("no login attempt recorded in scenario world"))?;
    let success = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected login failure: {err}"))?;
    if success.session().state() != LoginState::Success {
        return Err(eyre::eyre!(
            "expected success state, found {}",
            success.session().state()
        ));
    }
    Ok(())
}

#[then(r#"the redirect URL is "{expected}""#)]
fn redirect_url_matches(world: &LoginWorld, expected: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result()
        .ok_or_else(|| eyre::eyre!("no login attempt recorded in scenario world"))?;
    let success = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected login failure: {err}"))?;
    if success.redirect_url() != expected {
        return Err(eyre::eyre!(
            "expected redirect {expected}, found {}",
            success.redirect_url()
        ));
    }
    Ok(())
}

#[then("the built-in default settings are in effect")]
fn default_settings_in_effect(world: &LoginWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result()
        .ok_or_else(|| eyre::eyre!("no login attempt recorded in scenario world"))?;
    let success = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected login failure: {err}"))?;
    if success.session().settings_synced() {
        return Err(eyre::eyre!("expected settings to fall back to defaults"));
    }
    if success.session().settings() != &AccountSettings::default() {
        return Err(eyre::eyre!("expected built-in default settings"));
    }
    Ok(())
}

#[then("the first two failures are presented inline")]
fn first_failures_inline(world: &LoginWorld) -> Result<(), eyre::Report> {
    for index in 0..2 {
        let result = world
            .results
            .get(index)
            .ok_or_else(|| eyre::eyre!("missing login attempt {index} in scenario world"))?;
        match result {
            Err(AuthError::InvalidPassphrase { presentation, .. })
                if *presentation == FailurePresentation::Inline => {}
            other => {
                return Err(eyre::eyre!(
                    "expected inline invalid-passphrase failure, found {other:?}"
                ));
            }
        }
    }
    Ok(())
}

#[then("the third failure switches to the terminal view")]
fn third_failure_terminal(world: &LoginWorld) -> Result<(), eyre::Report> {
    match world.results.get(2) {
        Some(Err(AuthError::InvalidPassphrase {
            attempts: 3,
            presentation: FailurePresentation::Terminal,
        })) => Ok(()),
        other => Err(eyre::eyre!(
            "expected terminal failure on the third attempt, found {other:?}"
        )),
    }
}

#[then("the passphrase is remembered")]
fn passphrase_is_remembered(world: &LoginWorld) -> Result<(), eyre::Report> {
    if run_async(world.cache.read()).is_none() {
        return Err(eyre::eyre!("expected the passphrase to be remembered"));
    }
    Ok(())
}

#[then("the passphrase is no longer remembered")]
fn passphrase_forgotten(world: &LoginWorld) -> Result<(), eyre::Report> {
    if run_async(world.cache.read()).is_some() {
        return Err(eyre::eyre!("expected the remembered passphrase to expire"));
    }
    Ok(())
}
