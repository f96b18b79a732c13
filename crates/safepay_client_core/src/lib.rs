//! Safepay client core: everything the UI needs that is not UI.
//!
//! - [`api::ApiClient`]: typed calls to the Safepay service with bearer auth and
//!   forced logout on 403.
//! - [`auth`]: token presence checks plus the signup/signin flows.
//! - [`storage`]: where the token lives (SQLite natively, `localStorage` in the browser).
//! - [`transfer`], [`validation`], [`format`], [`debounce`]: form rules, display helpers
//!   and search debouncing shared by the screens.

pub mod api;
pub mod auth;
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod ids;
pub mod log_bridge;
pub mod models;
pub mod storage;
pub mod transfer;
pub mod validation;

pub use api::{ApiClient, SessionHook};
pub use auth::Auth;
pub use config::ClientConfig;
pub use error::{ApiError, StorageError, SubmitError};
pub use log_bridge::drain_client_logs;
pub use validation::ValidationError;

/// Client for the configured backend with the platform's persistent token store.
pub fn default_client() -> ApiClient {
    ApiClient::new(ClientConfig::from_env(), storage::default_token_store())
}
