//! Signup/signin: local validation gates the request, issued tokens are persisted
//! and attached to later calls.

use crate::common::{client_for, StubServer};
use pretty_assertions::assert_eq;
use safepay_client_core::auth::{login, register};
use safepay_client_core::validation::{SigninForm, SignupForm};
use safepay_client_core::{ApiError, SubmitError};
use serde_json::json;

fn signup_form(password: &str) -> SignupForm {
    SignupForm {
        first_name: " Asha ".into(),
        last_name: "Rao".into(),
        username: "asha@example.com".into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn short_password_blocks_signup_without_a_request() {
    let server = StubServer::start().await;
    server.respond("POST", "/user/signup", 200, json!({ "message": "ok", "token": "t" }));
    let client = client_for(&server, None);

    let err = register(&client, &signup_form("Ab1")).await.unwrap_err();

    match err {
        SubmitError::Invalid(e) => assert_eq!(e.field, "password"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(server.requests().is_empty(), "no network call expected");
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn signup_posts_camel_case_body_and_stores_token() {
    let server = StubServer::start().await;
    server.respond("POST", "/user/signup", 200, json!({ "message": "User created", "token": "jwt-1" }));
    let client = client_for(&server, None);

    let resp = register(&client, &signup_form("Secret123")).await.expect("signup");

    assert_eq!(resp.token, "jwt-1");
    assert_eq!(client.auth().token().as_deref(), Some("jwt-1"));
    let sent = server.requests_to("/user/signup");
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].json(),
        json!({
            "firstName": "Asha",
            "lastName": "Rao",
            "username": "asha@example.com",
            "password": "Secret123",
        })
    );
}

#[tokio::test]
async fn signin_token_is_attached_to_later_requests() {
    let server = StubServer::start().await;
    server.respond("POST", "/user/signin", 200, json!({ "message": "ok", "token": "jwt-2" }));
    server.respond("GET", "/account/balance", 200, json!({ "balance": 1200.5 }));
    let client = client_for(&server, None);

    let form = SigninForm { username: "asha@example.com".into(), password: "Secret123".into() };
    login(&client, &form).await.expect("signin");
    let balance = client.get_balance().await.expect("balance");

    assert_eq!(balance.balance, 1200.5);
    let signin = &server.requests_to("/user/signin")[0];
    assert_eq!(signin.authorization, None);
    let bal = &server.requests_to("/account/balance")[0];
    assert_eq!(bal.authorization.as_deref(), Some("Bearer jwt-2"));
}

#[tokio::test]
async fn empty_token_in_response_is_rejected() {
    let server = StubServer::start().await;
    server.respond("POST", "/user/signin", 200, json!({ "message": "ok", "token": "" }));
    let client = client_for(&server, None);

    let form = SigninForm { username: "asha@example.com".into(), password: "Secret123".into() };
    let err = login(&client, &form).await.unwrap_err();

    assert!(matches!(err, SubmitError::Api(ApiError::MissingToken)));
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn bad_credentials_surface_server_message() {
    let server = StubServer::start().await;
    server.respond("POST", "/user/signin", 400, json!({ "message": "Invalid username or password" }));
    let client = client_for(&server, None);

    let form = SigninForm { username: "asha@example.com".into(), password: "wrong".into() };
    let err = login(&client, &form).await.unwrap_err();

    assert_eq!(err.user_message("Sign in failed").as_deref(), Some("Invalid username or password"));
}

#[tokio::test]
async fn logout_clears_token_locally() {
    let server = StubServer::start().await;
    let client = client_for(&server, Some("jwt"));
    assert!(client.auth().is_authenticated());

    client.logout().expect("logout");

    assert!(!client.auth().is_authenticated());
    assert!(server.requests().is_empty());
}
