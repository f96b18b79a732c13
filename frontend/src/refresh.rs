//! Dashboard re-fetch when the tab becomes visible again, e.g. after paying from
//! another tab or coming back to the window.

/// Posts `document.visibilityState` back to Rust on every change.
pub const VISIBILITY_LISTENER: &str = r#"
document.addEventListener("visibilitychange", () => {
    dioxus.send(document.visibilityState);
});
"#;

/// Next value of the dashboard refresh counter after a visibility change.
/// Only becoming `visible` triggers a re-fetch.
pub fn next_refresh(current: u32, visibility_state: &str) -> u32 {
    if visibility_state == "visible" {
        current.wrapping_add(1)
    } else {
        current
    }
}
