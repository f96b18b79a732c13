//! HTTP client for the Safepay API (auth, users, account).
//!
//! Every request carries `Authorization: Bearer <token>` when a token is stored.
//! Responses pass through one interception point: a 403 from any endpoint means the
//! session is invalid, so the token is cleared, the session-expired hook fires and the
//! caller gets `ApiError::SessionExpired` instead of a regular HTTP error.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Auth;
use crate::client_log;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, BalanceResponse, BulkUsersResponse, MessageResponse, SigninRequest, SignupRequest,
    TransactionFilter, TransactionStats, TransactionsResponse, TransferRequest, TransferResponse,
    UpdateUserRequest, UserProfileResponse,
};
use crate::storage::TokenStore;

/// Called after a 403 has cleared the token. The UI uses it to go to sign-in.
pub type SessionHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    auth: Auth,
    on_session_expired: Option<SessionHook>,
}

fn build_http(config: &ClientConfig) -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = reqwest::Client::builder().timeout(config.timeout);
    #[cfg(target_arch = "wasm32")]
    let builder = {
        let _ = config;
        reqwest::Client::builder()
    };
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// `message` field of a JSON error body, if any.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|v| v.as_str()).map(String::from))
        .filter(|m| !m.trim().is_empty())
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http: build_http(&config),
            config,
            auth: Auth::new(store),
            on_session_expired: None,
        }
    }

    pub fn with_session_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.auth.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => client_log!("[safepay] api: stored token is not a valid header value: {}", e),
            }
        }
        headers
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.url(path)).headers(self.headers())
    }

    fn expire_session(&self) {
        client_log!("[safepay] api: 403 received, session expired; clearing token");
        if let Err(e) = self.auth.remove_token() {
            client_log!("[safepay] api: failed to clear token: {}", e);
        }
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }

    async fn send<T: DeserializeOwned>(&self, label: &str, rb: RequestBuilder) -> Result<T, ApiError> {
        let resp = rb.send().await.map_err(|e| {
            client_log!("[safepay] {} failed: network error {}", label, e);
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        // before touching the body: an unreadable 403 still ends the session
        if status == StatusCode::FORBIDDEN {
            self.expire_session();
            return Err(ApiError::SessionExpired);
        }
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            let message = server_message(&text);
            client_log!("[safepay] {} failed: status={} message={:?}", label, status.as_u16(), message);
            return Err(ApiError::Http { status: status.as_u16(), message });
        }
        log::debug!("[safepay] {} ok status={}", label, status.as_u16());
        serde_json::from_str(&text).map_err(|e| {
            client_log!("[safepay] {} failed: decode error {}", label, e);
            ApiError::Decode(e.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(path, self.request(Method::GET, path)).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(path, self.request(method, path).json(body)).await
    }

    // --- Auth ---

    /// POST /user/signup
    pub async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/user/signup", req).await
    }

    /// POST /user/signin
    pub async fn signin(&self, req: &SigninRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/user/signin", req).await
    }

    pub async fn signup_and_store(&self, req: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let resp = self.signup(req).await?;
        self.store_token(&resp)?;
        client_log!("[safepay] signup ok, token stored");
        Ok(resp)
    }

    pub async fn signin_and_store(&self, req: &SigninRequest) -> Result<AuthResponse, ApiError> {
        let resp = self.signin(req).await?;
        self.store_token(&resp)?;
        client_log!("[safepay] signin ok, token stored");
        Ok(resp)
    }

    fn store_token(&self, resp: &AuthResponse) -> Result<(), ApiError> {
        if resp.token.trim().is_empty() {
            client_log!("[safepay] auth failed: no token in response");
            return Err(ApiError::MissingToken);
        }
        self.auth.set_token(&resp.token)?;
        Ok(())
    }

    /// Local logout; the service keeps no session to end.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.auth.remove_token()?;
        client_log!("[safepay] signout: token removed");
        Ok(())
    }

    // --- User ---

    /// GET /user/me
    pub async fn get_profile(&self) -> Result<UserProfileResponse, ApiError> {
        self.get("/user/me").await
    }

    /// PUT /user/
    pub async fn update_user(&self, req: &UpdateUserRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::PUT, "/user/", req).await
    }

    /// GET /user/bulk?filter=
    pub async fn search_users(&self, filter: &str) -> Result<BulkUsersResponse, ApiError> {
        let path = format!("/user/bulk?filter={}", urlencoding::encode(filter));
        self.get(&path).await
    }

    // --- Account ---

    /// GET /account/balance
    pub async fn get_balance(&self) -> Result<BalanceResponse, ApiError> {
        self.get("/account/balance").await
    }

    /// POST /account/transfer
    pub async fn transfer(&self, req: &TransferRequest) -> Result<TransferResponse, ApiError> {
        client_log!("[safepay] transfer to={} amount={}", req.to, req.amount);
        self.send_json(Method::POST, "/account/transfer", req).await
    }

    /// GET /account/transactions?page&limit[&type]
    pub async fn get_transactions(
        &self,
        page: u32,
        limit: u32,
        filter: TransactionFilter,
    ) -> Result<TransactionsResponse, ApiError> {
        let path = "/account/transactions";
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(kind) = filter.query_value() {
            query.push(("type", kind.to_string()));
        }
        self.send(path, self.request(Method::GET, path).query(&query)).await
    }

    /// GET /account/stats
    pub async fn get_stats(&self) -> Result<TransactionStats, ApiError> {
        self.get("/account/stats").await
    }
}
