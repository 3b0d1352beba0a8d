//! Cross-context messaging through registry-addressed workers.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

use vaultlink::bridge::adapters::memory::InMemoryDuplex;
use vaultlink::bridge::domain::Channel;
use vaultlink::bridge::services::responder_fn;
use vaultlink::registry::domain::{TabId, Worker, WorkerKey, WorkerName};
use vaultlink::registry::service::WorkerRegistry;

use super::helpers::{capture, next};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn emits_reach_only_the_addressed_worker() {
    let registry = WorkerRegistry::new();
    let first = InMemoryDuplex::connected_pair();
    let second = InMemoryDuplex::connected_pair();
    registry
        .register(Worker::new(
            WorkerKey::new(WorkerName::App, TabId::new(1)),
            first.left,
            &DefaultClock,
        ))
        .expect("registration should succeed");
    registry
        .register(Worker::new(
            WorkerKey::new(WorkerName::App, TabId::new(2)),
            second.left,
            &DefaultClock,
        ))
        .expect("registration should succeed");
    let mut tab_one = capture(&first.right, Channel::SettingsSync);
    let mut tab_two = capture(&second.right, Channel::SettingsSync);

    let worker = registry
        .get(WorkerName::App, TabId::new(1))
        .expect("worker should be registered");
    worker
        .bridge()
        .emit(Channel::SettingsSync, json!({"tab": 1}))
        .await
        .expect("emit should succeed");

    assert_eq!(next(&mut tab_one).await, json!({"tab": 1}));
    assert!(
        tokio::time::timeout(std::time::Duration::from_millis(50), tab_two.recv())
            .await
            .is_err(),
        "the other tab's worker must not see the emit"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn requests_round_trip_through_a_registered_worker() {
    let registry = WorkerRegistry::new();
    let pair = InMemoryDuplex::connected_pair();
    registry
        .register(Worker::new(
            WorkerKey::new(WorkerName::QuickAccess, TabId::new(3)),
            pair.left,
            &DefaultClock,
        ))
        .expect("registration should succeed");
    pair.right
        .respond(
            Channel::AuthIsMfaRequired,
            responder_fn(|_payload| async move { Ok(json!({"required": false})) }),
        )
        .expect("responder registration should succeed");

    let worker = registry
        .get(WorkerName::QuickAccess, TabId::new(3))
        .expect("worker should be registered");
    let response = worker
        .bridge()
        .request(Channel::AuthIsMfaRequired, json!({}))
        .await
        .expect("request should resolve");

    assert_eq!(response, json!({"required": false}));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tab_teardown_unregisters_every_worker_on_the_tab() {
    let registry = Arc::new(WorkerRegistry::new());
    for name in [WorkerName::App, WorkerName::LoginForm] {
        let pair = InMemoryDuplex::connected_pair();
        registry
            .register(Worker::new(
                WorkerKey::new(name, TabId::new(9)),
                pair.left,
                &DefaultClock,
            ))
            .expect("registration should succeed");
    }

    let removed = registry
        .unregister_tab(TabId::new(9))
        .expect("teardown should succeed");

    assert_eq!(removed.len(), 2);
    assert!(registry.get(WorkerName::App, TabId::new(9)).is_err());
    assert!(registry.is_empty().expect("registry should be readable"));
}
