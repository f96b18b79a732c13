//! Send-money flow end to end: client-side guards, receipt handling, status mapping.

use crate::common::{client_for, client_with_hook_counter, StubServer};
use pretty_assertions::assert_eq;
use safepay_client_core::transfer::{submit_transfer, transfer_failure};
use safepay_client_core::SubmitError;
use serde_json::json;
use std::sync::atomic::Ordering;

const RECIPIENT: &str = "67cd6eb1632aa6528f15137f";

#[tokio::test]
async fn amount_above_last_fetched_balance_is_blocked_locally() {
    let server = StubServer::start().await;
    server.respond("GET", "/account/balance", 200, json!({ "balance": 250.0 }));
    server.respond("POST", "/account/transfer", 200, json!({ "message": "ok" }));
    let client = client_for(&server, Some("jwt"));

    let balance = client.get_balance().await.expect("balance").balance;
    let err = submit_transfer(&client, RECIPIENT, "Vik", "250.01", "", Some(balance))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(transfer_failure(&err).unwrap().message, "Insufficient balance");
    assert!(server.requests_to("/account/transfer").is_empty());
}

#[tokio::test]
async fn successful_transfer_reports_server_from_balance() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/account/transfer",
        200,
        json!({
            "message": "Transfer successful",
            "data": {
                "fromBalance": 749.5,
                "toBalance": 1250.5,
                "amount": 250.5,
                "receiver": { "name": "Vik Sen", "username": "vik@example.com" }
            }
        }),
    );
    let client = client_for(&server, Some("jwt"));

    let summary = submit_transfer(&client, RECIPIENT, "Vik", "250.5", " rent ", Some(1000.0))
        .await
        .expect("transfer");

    assert_eq!(summary.new_balance, Some(749.5));
    assert_eq!(summary.receiver_name, "Vik Sen");
    assert_eq!(summary.amount, 250.5);
    let sent = server.requests_to("/account/transfer");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer jwt"));
    assert_eq!(sent[0].json(), json!({ "to": RECIPIENT, "amount": 250.5, "description": "rent" }));
}

#[tokio::test]
async fn status_codes_map_to_screen_messages() {
    let server = StubServer::start().await;
    let client = client_for(&server, Some("jwt"));

    let cases = [
        (400, json!({ "message": "Cannot transfer to yourself" }), "Cannot transfer to yourself", false),
        (401, json!({}), "Your session has expired. Please sign in again.", true),
        (404, json!({ "message": "User not found" }), "Recipient not found", false),
        (407, json!({}), "Insufficient balance for this transfer", false),
        (500, json!({}), "Transfer failed. Please try again.", false),
    ];
    for (status, body, message, redirect) in cases {
        server.respond("POST", "/account/transfer", status, body);
        let err = submit_transfer(&client, RECIPIENT, "Vik", "10", "", Some(100.0))
            .await
            .unwrap_err();
        let failure = transfer_failure(&err).expect("inline failure");
        assert_eq!(failure.message, message, "status {}", status);
        assert_eq!(failure.redirect_to_signin, redirect, "status {}", status);
    }
}

#[tokio::test]
async fn forbidden_transfer_short_circuits_page_handling() {
    let server = StubServer::start().await;
    server.respond("POST", "/account/transfer", 403, json!({ "message": "Forbidden" }));
    let (client, fired) = client_with_hook_counter(&server, "jwt");

    let err = submit_transfer(&client, RECIPIENT, "Vik", "10", "", Some(100.0))
        .await
        .unwrap_err();

    assert_eq!(transfer_failure(&err), None);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn completed_transfer_shows_up_in_the_activity_trail() {
    let server = StubServer::start().await;
    server.respond(
        "POST",
        "/account/transfer",
        200,
        json!({
            "message": "Transfer successful",
            "data": {
                "fromBalance": 90.0,
                "toBalance": 10.0,
                "amount": 10.0,
                "receiver": { "name": "Vik Sen", "username": "vik@example.com" }
            }
        }),
    );
    let client = client_for(&server, Some("secret-jwt"));

    submit_transfer(&client, RECIPIENT, "Vik", "10", "", Some(100.0))
        .await
        .expect("transfer");

    let trail = safepay_client_core::drain_client_logs();
    assert!(trail.iter().any(|l| l.contains("transfer ok amount=10")), "trail: {:?}", trail);
    assert!(!trail.iter().any(|l| l.contains("secret-jwt")));
}
