//! Profile, history paging/filtering, stats and profile update wiring.

use crate::common::{client_for, user_json, StubServer};
use pretty_assertions::assert_eq;
use safepay_client_core::models::{TransactionFilter, TransactionKind, UpdateUserRequest};
use serde_json::json;

#[tokio::test]
async fn profile_includes_balance() {
    let server = StubServer::start().await;
    let mut user = user_json("u1", "Asha", "Rao");
    user["balance"] = json!(4321.75);
    server.respond("GET", "/user/me", 200, json!({ "user": user }));
    let client = client_for(&server, Some("jwt"));

    let profile = client.get_profile().await.expect("profile").user;

    assert_eq!(profile.user.initials(), "AR");
    assert_eq!(profile.balance, 4321.75);
}

#[tokio::test]
async fn history_sends_page_limit_and_optional_type() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/account/transactions",
        200,
        json!({
            "transactions": [{
                "_id": "t1",
                "fromUser": user_json("u1", "Asha", "Rao"),
                "toUser": user_json("u2", "Vik", "Sen"),
                "amount": 99.0,
                "type": "sent",
                "description": "tea",
                "timestamp": "2026-10-15T08:00:00Z"
            }],
            "pagination": { "page": 2, "limit": 10, "total": 11, "pages": 2 }
        }),
    );
    let client = client_for(&server, Some("jwt"));

    let all = client.get_transactions(2, 10, TransactionFilter::All).await.expect("all");
    client.get_transactions(1, 10, TransactionFilter::Received).await.expect("received");

    assert_eq!(all.pagination.pages, 2);
    assert_eq!(all.transactions[0].kind, TransactionKind::Sent);
    assert_eq!(all.transactions[0].counterparty().full_name(), "Vik Sen");
    let queries: Vec<_> = server
        .requests_to("/account/transactions")
        .into_iter()
        .map(|r| r.query.unwrap_or_default())
        .collect();
    assert_eq!(queries, vec!["page=2&limit=10".to_string(), "page=1&limit=10&type=received".to_string()]);
}

#[tokio::test]
async fn stats_are_decoded() {
    let server = StubServer::start().await;
    server.respond(
        "GET",
        "/account/stats",
        200,
        json!({ "totalSent": 500.0, "totalReceived": 750.0, "transactionCount": 12, "recentCount": 3, "netAmount": 250.0 }),
    );
    let client = client_for(&server, Some("jwt"));

    let stats = client.get_stats().await.expect("stats");

    assert_eq!(stats.transaction_count, 12);
    assert_eq!(stats.recent_count, 3);
    assert_eq!(stats.net_amount, 250.0);
}

#[tokio::test]
async fn update_user_puts_only_given_fields() {
    let server = StubServer::start().await;
    server.respond("PUT", "/user/", 200, json!({ "message": "Updated successfully" }));
    let client = client_for(&server, Some("jwt"));

    let req = UpdateUserRequest { last_name: Some("Rao-Sen".into()), ..Default::default() };
    let resp = client.update_user(&req).await.expect("update");

    assert_eq!(resp.message, "Updated successfully");
    let sent = server.requests_to("/user/");
    assert_eq!(sent[0].method, "PUT");
    assert_eq!(sent[0].json(), json!({ "lastName": "Rao-Sen" }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = StubServer::start().await;
    server.respond("GET", "/account/balance", 200, json!({ "amount": "lots" }));
    let client = client_for(&server, Some("jwt"));

    let err = client.get_balance().await.unwrap_err();

    assert!(matches!(err, safepay_client_core::ApiError::Decode(_)), "got {:?}", err);
}
