//! Full login wiring over real bridges and the worker registry.

use chrono::Duration;
use rstest::rstest;
use serde_json::json;

use vaultlink::bridge::domain::Channel;
use vaultlink::registry::domain::{TabId, WorkerKey, WorkerName};

use super::helpers::{attach_app_worker, login_harness, next};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn caller_delivery_resolves_the_login_request() {
    let harness = login_harness(WorkerKey::new(WorkerName::QuickAccess, TabId::new(1)));

    let response = harness
        .caller
        .request(
            Channel::AuthLogin,
            json!({"passphrase": "correct horse", "redirect_path": "/vault"}),
        )
        .await
        .expect("login request should resolve");

    assert_eq!(response["status"], "success");
    assert_eq!(response["redirect_url"], "https://vault.example.org/vault");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn app_worker_delivery_routes_processing_then_outcome() {
    let origin = WorkerKey::new(WorkerName::LoginForm, TabId::new(7));
    let harness = login_harness(origin);
    let mut streams = attach_app_worker(
        &harness.registry,
        origin.tab_id,
        &[Channel::AuthLoginProcessing, Channel::AuthAfterLoginSuccess],
    );

    let ack = harness
        .caller
        .request(
            Channel::AuthLogin,
            json!({
                "passphrase": "correct horse",
                "delivery": "app-worker",
                "redirect_path": "/home",
            }),
        )
        .await
        .expect("routed login request should acknowledge");

    assert_eq!(ack["status"], "routed");
    let mut success = streams.pop().expect("success stream");
    let mut processing = streams.pop().expect("processing stream");
    next(&mut processing).await;
    let outcome = next(&mut success).await;
    assert_eq!(outcome["redirect_url"], "https://vault.example.org/home");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_passphrase_routes_the_failure_to_the_app_worker() {
    let origin = WorkerKey::new(WorkerName::LoginForm, TabId::new(7));
    let harness = login_harness(origin);
    harness.crypto.reject_passphrase(true);
    let mut streams = attach_app_worker(
        &harness.registry,
        origin.tab_id,
        &[Channel::AuthAfterLoginFailure],
    );

    let ack = harness
        .caller
        .request(
            Channel::AuthLogin,
            json!({"passphrase": "wrong horse", "delivery": "app-worker"}),
        )
        .await
        .expect("routed login request should acknowledge even on failure");

    assert_eq!(ack["status"], "routed");
    let mut failures = streams.pop().expect("failure stream");
    let payload = next(&mut failures).await;
    assert_eq!(payload["code"], "invalid-passphrase");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_outage_does_not_fail_the_login() {
    let harness = login_harness(WorkerKey::new(WorkerName::QuickAccess, TabId::new(1)));
    harness.api.fail_settings(true);

    let response = harness
        .caller
        .request(Channel::AuthLogin, json!({"passphrase": "correct horse"}))
        .await
        .expect("login should still resolve on default settings");

    assert_eq!(response["status"], "success");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remembered_passphrase_expires_after_the_remember_window() {
    let harness = login_harness(WorkerKey::new(WorkerName::QuickAccess, TabId::new(1)));

    harness
        .caller
        .request(
            Channel::AuthLogin,
            json!({"passphrase": "correct horse", "remember": true}),
        )
        .await
        .expect("login request should resolve");

    assert!(harness.cache.read().await.is_some());
    harness.clock.advance(Duration::seconds(300));
    assert!(harness.cache.read().await.is_none());
}
