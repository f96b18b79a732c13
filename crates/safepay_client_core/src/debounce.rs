//! Trailing-edge debounce for search-as-you-type.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delay after the last keystroke before the user directory is queried.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Platform sleep: tokio timers natively, `setTimeout` in the browser.
pub async fn sleep(duration: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

/// Each call takes a ticket; after the delay only the newest ticket wins.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait `delay`, then report whether no newer call arrived in the meantime.
    /// Callers proceed with their request only on `true`.
    pub async fn debounce(&self, delay: Duration) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(delay).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }
}
