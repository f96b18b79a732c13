pub mod stub_server;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use safepay_client_core::storage::MemoryTokenStore;
use safepay_client_core::{ApiClient, ClientConfig};
use serde_json::{json, Value};

pub use stub_server::StubServer;

/// Client against the stub with an in-memory token store (optionally pre-seeded).
pub fn client_for(server: &StubServer, token: Option<&str>) -> ApiClient {
    let store = match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::new(),
    };
    ApiClient::new(ClientConfig::new(server.base_url.clone()), Arc::new(store))
}

/// Client whose session-expired hook bumps the returned counter.
pub fn client_with_hook_counter(server: &StubServer, token: &str) -> (ApiClient, Arc<AtomicUsize>) {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let client = client_for(server, Some(token)).with_session_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (client, fired)
}

pub fn user_json(id: &str, first: &str, last: &str) -> Value {
    json!({
        "_id": id,
        "firstName": first,
        "lastName": last,
        "username": format!("{}@example.com", first.to_lowercase()),
    })
}
