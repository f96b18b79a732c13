//! Client configuration from the environment.
//! Native builds read env vars at runtime; wasm builds bake them in at compile time.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applied on native targets only (the fetch backend has no client timeout).
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Self {
        Self::from_values(env_value("SAFEPAY_API_BASE_URL"), env_value("SAFEPAY_HTTP_TIMEOUT_SECS"))
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = timeout_secs
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url: normalize_base_url(&base_url),
            timeout: Duration::from_secs(timeout),
        }
    }

    /// `base_url` joined with an absolute API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(s: &str) -> String {
    s.trim().trim_end_matches('/').to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_value(key: &str) -> Option<String> {
    match key {
        "SAFEPAY_API_BASE_URL" => option_env!("SAFEPAY_API_BASE_URL").map(String::from),
        "SAFEPAY_HTTP_TIMEOUT_SECS" => option_env!("SAFEPAY_HTTP_TIMEOUT_SECS").map(String::from),
        _ => None,
    }
}
