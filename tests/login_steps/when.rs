//! When steps for login flow BDD scenarios.

use chrono::Duration;
use rstest_bdd_macros::when;

use super::world::LoginWorld;
use vaultlink::auth::services::DEFAULT_REMEMBER_TTL_SECONDS;

#[when(r#"the user logs in requesting redirect "{redirect_path}""#)]
fn login_with_redirect(world: &mut LoginWorld, redirect_path: String) {
    world.attempt_login(false, Some(redirect_path));
}

#[when("the user logs in with remembering enabled")]
fn login_with_remember(world: &mut LoginWorld) {
    world.attempt_login(true, None);
}

#[when("the user attempts to log in {count:u32} times")]
fn login_repeatedly(world: &mut LoginWorld, count: u32) {
    for _ in 0..count {
        world.attempt_login(false, None);
    }
}

#[when("the remember window elapses")]
fn remember_window_elapses(world: &mut LoginWorld) {
    world
        .clock
        .advance(Duration::seconds(DEFAULT_REMEMBER_TTL_SECONDS));
}
