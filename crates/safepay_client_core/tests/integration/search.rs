//! User directory search: debounced typing issues one request per pause.

use std::time::Duration;

use crate::common::{client_for, user_json, StubServer};
use pretty_assertions::assert_eq;
use safepay_client_core::debounce::Debouncer;
use safepay_client_core::ApiClient;
use serde_json::json;
use tokio::task::JoinHandle;

const DELAY: Duration = Duration::from_millis(80);
const KEYSTROKE_GAP: Duration = Duration::from_millis(10);

fn keystroke(client: &ApiClient, debouncer: &Debouncer, query: &str) -> JoinHandle<bool> {
    let client = client.clone();
    let debouncer = debouncer.clone();
    let query = query.to_string();
    tokio::spawn(async move {
        if !debouncer.debounce(DELAY).await {
            return false;
        }
        client.search_users(&query).await.is_ok()
    })
}

async fn type_burst(client: &ApiClient, debouncer: &Debouncer, word: &str) -> Vec<JoinHandle<bool>> {
    let mut handles = Vec::new();
    for end in 1..=word.len() {
        handles.push(keystroke(client, debouncer, &word[..end]));
        tokio::time::sleep(KEYSTROKE_GAP).await;
    }
    handles
}

#[tokio::test]
async fn one_request_per_pause_in_typing() {
    let server = StubServer::start().await;
    server.respond("GET", "/user/bulk", 200, json!({ "user": [user_json("u1", "Asha", "Rao")] }));
    let client = client_for(&server, Some("jwt"));
    let debouncer = Debouncer::new();

    let first = type_burst(&client, &debouncer, "ash").await;
    let mut searched = 0;
    for h in first {
        searched += h.await.unwrap() as usize;
    }
    assert_eq!(searched, 1);
    let sent = server.requests_to("/user/bulk");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query.as_deref(), Some("filter=ash"));

    let second = type_burst(&client, &debouncer, "vi").await;
    for h in second {
        h.await.unwrap();
    }
    let sent = server.requests_to("/user/bulk");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].query.as_deref(), Some("filter=vi"));
}

#[tokio::test]
async fn filter_is_url_encoded_and_users_decoded() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/user/bulk",
        200,
        json!({ "user": [user_json("u1", "Asha", "Rao"), user_json("u2", "Vik", "Sen")] }),
    );
    let client = client_for(&server, Some("jwt"));

    let resp = client.search_users("a b&c").await.expect("search");

    assert_eq!(resp.user.len(), 2);
    assert_eq!(resp.user[1].full_name(), "Vik Sen");
    assert_eq!(server.requests_to("/user/bulk")[0].query.as_deref(), Some("filter=a%20b%26c"));
}
