//! Error types shared by the API client, token storage and form flows.

use thiserror::Error;

use crate::validation::ValidationError;

/// Token storage failure (SQLite on native, `localStorage` in the browser).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Failure of a call against the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    /// 403 from any endpoint. The token is already cleared and the redirect hook fired.
    #[error("session expired")]
    SessionExpired,
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("no token in auth response")]
    MissingToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(403),
            _ => None,
        }
    }

    /// Inline text for a failed request. `None` for `SessionExpired`: the interceptor
    /// has already navigated away, so callers render nothing.
    pub fn user_message(&self, fallback: &str) -> Option<String> {
        match self {
            ApiError::SessionExpired => None,
            ApiError::Http { status: 400, message: Some(m) } => Some(m.clone()),
            ApiError::Http { status: 401, .. } => {
                Some("Your session has expired. Please sign in again.".to_string())
            }
            ApiError::Http { status: 404, message } => {
                Some(message.clone().unwrap_or_else(|| "Not found".to_string()))
            }
            ApiError::Http { message: Some(m), .. } => Some(m.clone()),
            _ => Some(fallback.to_string()),
        }
    }
}

/// A form submission: either blocked locally or failed remotely.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self, fallback: &str) -> Option<String> {
        match self {
            SubmitError::Invalid(e) => Some(e.message.clone()),
            SubmitError::Api(e) => e.user_message(fallback),
        }
    }
}
