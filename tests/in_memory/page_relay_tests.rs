//! Untrusted-page traffic through the allow-listed relay.

use std::sync::Arc;

use rstest::rstest;
use serde_json::json;

use vaultlink::bridge::adapters::memory::InMemoryDuplex;
use vaultlink::bridge::domain::Channel;
use vaultlink::bridge::services::{MessageBridge, responder_fn};
use vaultlink::page::{AllowList, PageRelay, RelayOutcome};

use super::helpers::{capture, next};

struct RelayChain {
    relay: PageRelay,
    page: Arc<MessageBridge>,
    background: Arc<MessageBridge>,
}

fn relay_chain() -> RelayChain {
    let page_link = InMemoryDuplex::connected_pair();
    let extension_link = InMemoryDuplex::connected_pair();
    let relay = PageRelay::new(
        page_link.left,
        extension_link.left,
        AllowList::login_surface(),
    );
    RelayChain {
        relay,
        page: page_link.right,
        background: extension_link.right,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_login_request_crosses_the_relay_and_resolves() {
    let chain = relay_chain();
    chain
        .background
        .respond(
            Channel::AuthLogin,
            responder_fn(|_payload| async move { Ok(json!({"status": "success"})) }),
        )
        .expect("responder registration should succeed");

    let response = chain
        .relay
        .request_from_page(Channel::AuthLogin, json!({"passphrase": "correct horse"}))
        .await
        .expect("allow-listed request should succeed");

    assert_eq!(response, Some(json!({"status": "success"})));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_cannot_request_outside_the_allow_list() {
    let chain = relay_chain();

    let response = chain
        .relay
        .request_from_page(Channel::SettingsSync, json!({}))
        .await
        .expect("blocked request should not error");

    assert_eq!(response, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn extension_outcome_reaches_the_page() {
    let chain = relay_chain();
    let mut seen = capture(&chain.page, Channel::AuthAfterLoginSuccess);

    let outcome = chain
        .relay
        .relay_to_page(
            Channel::AuthAfterLoginSuccess,
            json!({"redirect_url": "https://vault.example.org/"}),
        )
        .await
        .expect("relay should succeed");

    assert_eq!(outcome, RelayOutcome::Relayed);
    assert_eq!(
        next(&mut seen).await,
        json!({"redirect_url": "https://vault.example.org/"})
    );
}
