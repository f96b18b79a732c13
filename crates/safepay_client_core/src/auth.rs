//! Token lifecycle and the signup/signin flows built on it.
//!
//! A session is just a stored token: `is_authenticated` checks presence only and
//! never looks at expiry. The server tells us a token is stale by answering 403,
//! which the API client turns into a forced logout.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::client_log;
use crate::error::{StorageError, SubmitError};
use crate::models::{AuthResponse, SigninRequest, SignupRequest};
use crate::storage::TokenStore;
use crate::validation::{SigninForm, SignupForm};

/// Shared handle to the persisted token.
#[derive(Clone)]
pub struct Auth {
    store: Arc<dyn TokenStore>,
}

impl Auth {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(token)
    }

    pub fn remove_token(&self) -> Result<(), StorageError> {
        self.store.remove()
    }

    /// Current token; unreadable storage counts as no token.
    pub fn token(&self) -> Option<String> {
        match self.store.get() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                client_log!("[safepay] auth: failed to read token: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Validate the signup form, create the account and store the issued token.
/// Nothing is sent when validation fails.
pub async fn register(client: &ApiClient, form: &SignupForm) -> Result<AuthResponse, SubmitError> {
    form.validate()?;
    let request = SignupRequest {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        username: form.username.trim().to_string(),
        password: form.password.clone(),
    };
    Ok(client.signup_and_store(&request).await?)
}

/// Validate the signin form, authenticate and store the issued token.
pub async fn login(client: &ApiClient, form: &SigninForm) -> Result<AuthResponse, SubmitError> {
    form.validate()?;
    let request = SigninRequest {
        username: form.username.trim().to_string(),
        password: form.password.clone(),
    };
    Ok(client.signin_and_store(&request).await?)
}
