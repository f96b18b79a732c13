//! Buffers significant client log lines so the UI can show a recent-activity trail.
//! Every line is forwarded to the `log` facade; only the interesting ones are kept.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static CLIENT_LOG_BUFFER: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

const MAX_BUFFER_LEN: usize = 500;

fn should_keep(s: &str) -> bool {
    let lower = s.to_lowercase();
    if lower.contains("error")
        || lower.contains("warn")
        || lower.contains("failed")
        || lower.contains("session expired")
    {
        return true;
    }

    lower.contains("transfer") || lower.contains("signin") || lower.contains("signup")
}

/// Push a log line. Called by the `client_log!` macro.
pub fn push(s: String) {
    log::info!("{}", s);
    if !should_keep(&s) {
        return;
    }
    if let Ok(mut v) = CLIENT_LOG_BUFFER.lock() {
        v.push(s);
        let n = v.len();
        if n > MAX_BUFFER_LEN {
            v.drain(0..n - MAX_BUFFER_LEN);
        }
    }
}

/// Drain and clear buffered log lines.
pub fn drain_client_logs() -> Vec<String> {
    CLIENT_LOG_BUFFER
        .lock()
        .map(|mut v| std::mem::take(&mut *v))
        .unwrap_or_default()
}

#[macro_export]
macro_rules! client_log {
    ($($t:tt)*) => {
        $crate::log_bridge::push(format!($($t)*))
    };
}
