//! Response interception: 403 anywhere ends the session; other failures are left to the caller.

use std::sync::atomic::Ordering;

use crate::common::{client_for, client_with_hook_counter, StubServer};
use safepay_client_core::models::TransactionFilter;
use safepay_client_core::ApiError;
use serde_json::json;

#[tokio::test]
async fn forbidden_clears_token_and_fires_redirect_hook() {
    let server = StubServer::start().await;
    server.respond("GET", "/account/balance", 403, json!({ "message": "Invalid token" }));
    let (client, fired) = client_with_hook_counter(&server, "stale-jwt");

    let err = client.get_balance().await.unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(err.user_message("Failed to fetch balance"), None);
    assert!(!client.auth().is_authenticated(), "token must be cleared");
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn forbidden_is_handled_the_same_for_every_endpoint() {
    let server = StubServer::start().await;
    for (method, path) in [
        ("GET", "/user/me"),
        ("GET", "/user/bulk"),
        ("GET", "/account/transactions"),
        ("GET", "/account/stats"),
        ("PUT", "/user/"),
    ] {
        server.respond(method, path, 403, json!({}));
    }

    let (client, fired) = client_with_hook_counter(&server, "jwt");
    assert!(matches!(client.get_profile().await, Err(ApiError::SessionExpired)));
    assert!(!client.auth().is_authenticated());

    client.auth().set_token("jwt").unwrap();
    assert!(matches!(client.search_users("a").await, Err(ApiError::SessionExpired)));
    client.auth().set_token("jwt").unwrap();
    assert!(matches!(
        client.get_transactions(1, 10, TransactionFilter::All).await,
        Err(ApiError::SessionExpired)
    ));
    client.auth().set_token("jwt").unwrap();
    assert!(matches!(client.get_stats().await, Err(ApiError::SessionExpired)));
    client.auth().set_token("jwt").unwrap();
    let update = safepay_client_core::models::UpdateUserRequest::default();
    assert!(matches!(client.update_user(&update).await, Err(ApiError::SessionExpired)));

    assert_eq!(fired.load(Ordering::SeqCst), 5);
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn unauthorized_is_returned_to_the_caller_without_logout() {
    let server = StubServer::start().await;
    server.respond("GET", "/user/me", 401, json!({ "message": "Unauthorized" }));
    let (client, fired) = client_with_hook_counter(&server, "jwt");

    let err = client.get_profile().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(client.auth().is_authenticated());
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization_header() {
    let server = StubServer::start().await;
    server.respond("GET", "/user/bulk", 200, json!({ "user": [] }));
    let client = client_for(&server, None);

    client.search_users("").await.expect("search");

    assert_eq!(server.requests_to("/user/bulk")[0].authorization, None);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = safepay_client_core::ApiClient::new(
        safepay_client_core::ClientConfig::new("http://127.0.0.1:9/api/v1"),
        std::sync::Arc::new(safepay_client_core::storage::MemoryTokenStore::with_token("jwt")),
    );

    let err = client.get_balance().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    assert!(client.auth().is_authenticated());
}

#[tokio::test]
async fn forbidden_with_unreadable_body_still_ends_the_session() {
    let base_url = crate::common::stub_server::truncated_response("403 Forbidden").await;
    let fired = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = fired.clone();
    let client = safepay_client_core::ApiClient::new(
        safepay_client_core::ClientConfig::new(base_url),
        std::sync::Arc::new(safepay_client_core::storage::MemoryTokenStore::with_token("jwt")),
    )
    .with_session_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = client.get_balance().await.unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired), "got {:?}", err);
    assert!(!client.auth().is_authenticated());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn other_statuses_with_unreadable_body_are_network_errors() {
    let base_url = crate::common::stub_server::truncated_response("500 Internal Server Error").await;
    let client = safepay_client_core::ApiClient::new(
        safepay_client_core::ClientConfig::new(base_url),
        std::sync::Arc::new(safepay_client_core::storage::MemoryTokenStore::with_token("jwt")),
    );

    let err = client.get_balance().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    assert!(client.auth().is_authenticated());
}
