use dioxus::prelude::*;
use safepay_client_core::drain_client_logs;
use crate::theme::AppColors;

const MAX_LINES: usize = 50;

/// Collapsible trail of recent client events (sign-ins, transfers, failures).
/// Each refresh drains the client log buffer and keeps the newest lines.
#[component]
pub fn ActivityLog(is_dark: bool) -> Element {
    let mut open = use_signal(|| false);
    let mut lines = use_signal(Vec::<String>::new);

    let mut refresh = move || {
        let fresh = drain_client_logs();
        if fresh.is_empty() {
            return;
        }
        let mut all = lines.write();
        all.extend(fresh);
        let n = all.len();
        if n > MAX_LINES {
            all.drain(0..n - MAX_LINES);
        }
    };

    let muted = AppColors::muted(is_dark);
    let border = AppColors::border(is_dark);
    let arrow = if open() { "▾" } else { "▸" };

    rsx! {
        div { style: "border: 1px solid {border}; border-radius: 12px; padding: 8px 16px; font-size: 0.875rem;",
            button {
                onclick: move |_| {
                    if !open() {
                        refresh();
                    }
                    open.set(!open());
                },
                style: "background: none; border: none; color: inherit; font-weight: 600; cursor: pointer; padding: 4px 0;",
                "{arrow} Recent activity"
            }
            if open() {
                if lines.read().is_empty() {
                    div { style: "color: {muted}; padding: 4px 0;", "Nothing yet." }
                } else {
                    ul { style: "margin: 4px 0; padding-left: 16px; color: {muted}; font-family: ui-monospace, monospace; font-size: 0.75rem;",
                        for (i, line) in lines().into_iter().enumerate().rev() {
                            li { key: "{i}", "{line}" }
                        }
                    }
                }
                button {
                    onclick: move |_| refresh(),
                    style: "background: none; border: none; color: inherit; text-decoration: underline; cursor: pointer; padding: 4px 0;",
                    "Refresh"
                }
            }
        }
    }
}
