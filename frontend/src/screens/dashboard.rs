use dioxus::prelude::*;
use crate::app::use_api_client;
use crate::refresh::{next_refresh, VISIBILITY_LISTENER};
use crate::theme::{spacing, AppColors};
use crate::widgets::{ActivityLog, Appbar, Balance, Page, TransactionHistory, UserProfile, Users};

#[component]
pub fn DashboardScreen(is_dark: bool, on_toggle_theme: EventHandler<()>) -> Element {
    let client = use_api_client();
    // bumped whenever the tab becomes visible; every section re-fetches on change
    let mut refresh = use_signal(|| 0u32);
    use_future(move || async move {
        let mut visibility = document::eval(VISIBILITY_LISTENER);
        while let Ok(state) = visibility.recv::<String>().await {
            let next = next_refresh(*refresh.peek(), &state);
            if next != *refresh.peek() {
                log::debug!("[safepay] dashboard visible again, refreshing");
                refresh.set(next);
            }
        }
    });

    let balance = use_resource(move || {
        let client = client.clone();
        let _ = refresh();
        async move { client.get_balance().await.map(|b| b.balance) }
    });

    let destructive = AppColors::destructive(is_dark);
    let (value, loading, error) = match &*balance.read_unchecked() {
        None => (0.0, true, None),
        Some(Ok(v)) => (*v, false, None),
        Some(Err(e)) => (0.0, false, e.user_message("Failed to fetch balance")),
    };

    rsx! {
        Page { is_dark,
            Appbar { is_dark, on_toggle_theme: move |_| on_toggle_theme.call(()) }
            div { style: "max-width: {spacing::CONTENT_WIDTH}; margin: 0 auto; padding: 32px 16px; display: flex; flex-direction: column; gap: 32px;",
                ActivityLog { is_dark }
                if let Some(e) = error {
                    div { style: "padding: 12px 16px; border-radius: 12px; border: 1px solid {destructive}; color: {destructive};", "{e}" }
                }
                div { style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
                    Balance { is_dark, value, loading }
                    UserProfile { is_dark, refresh }
                }
                Users { is_dark }
                TransactionHistory { is_dark, refresh }
            }
        }
    }
}
