use dioxus::prelude::*;
use safepay_client_core::format::format_inr;
use safepay_client_core::models::TransactionStats;
use crate::app::use_api_client;
use crate::theme::AppColors;
use crate::widgets::Card;

/// Profile card with the account's lifetime and 30-day transfer stats.
#[component]
pub fn UserProfile(is_dark: bool, refresh: Signal<u32>) -> Element {
    let client = use_api_client();
    let profile = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let _ = refresh();
            async move { client.get_profile().await.map(|r| r.user) }
        }
    });
    // Stats are optional decoration; a failure only hides the grid.
    let stats = use_resource(move || {
        let client = client.clone();
        let _ = refresh();
        async move {
            client
                .get_stats()
                .await
                .map_err(|e| log::warn!("[safepay] failed to fetch stats: {}", e))
                .ok()
        }
    });

    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let destructive = AppColors::destructive(is_dark);
    let border = AppColors::border(is_dark);
    let on_primary = AppColors::ON_PRIMARY;

    let body = match &*profile.read_unchecked() {
        None => rsx! {
            div { style: "height: 32px; width: 33%; border-radius: 4px; background: {border}; margin-bottom: 16px;" }
            div { style: "height: 16px; width: 50%; border-radius: 4px; background: {border};" }
        },
        Some(Err(e)) => {
            let message = e.user_message("Failed to fetch profile");
            rsx! {
                if let Some(message) = message {
                    div { style: "color: {destructive}; font-size: 0.875rem;", "{message}" }
                }
            }
        }
        Some(Ok(p)) => {
            let stats: Option<TransactionStats> = stats.read_unchecked().clone().flatten();
            rsx! {
                div { style: "display: flex; align-items: center; gap: 16px;",
                    div { style: "height: 80px; width: 80px; border-radius: 16px; background: {primary}; color: {on_primary}; display: flex; align-items: center; justify-content: center; font-size: 1.875rem; font-weight: bold;",
                        "{p.user.initials()}"
                    }
                    div { style: "flex: 1;",
                        div { style: "font-size: 1.5rem; font-weight: bold;", "{p.user.full_name()}" }
                        div { style: "font-size: 0.875rem; color: {muted};", "{p.user.username}" }
                        div { style: "font-size: 1.125rem; font-weight: 600; color: {primary}; margin-top: 8px;", "{format_inr(p.balance)}" }
                    }
                }
                if let Some(s) = stats {
                    div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; padding-top: 16px; margin-top: 24px; border-top: 1px solid {border};",
                        StatTile { label: "Total Sent", value: format_inr(s.total_sent), color: destructive.to_string(), muted }
                        StatTile { label: "Total Received", value: format_inr(s.total_received), color: primary.to_string(), muted }
                        StatTile { label: "Transactions", value: s.transaction_count.to_string(), color: "inherit".to_string(), muted }
                        StatTile { label: "Last 30 Days", value: s.recent_count.to_string(), color: "inherit".to_string(), muted }
                    }
                }
            }
        }
    };

    rsx! {
        Card { is_dark, {body} }
    }
}

#[component]
fn StatTile(label: String, value: String, color: String, muted: &'static str) -> Element {
    rsx! {
        div { style: "padding: 16px; border-radius: 12px; background: rgba(16,185,129,0.08);",
            div { style: "font-size: 0.875rem; color: {muted}; margin-bottom: 4px;", "{label}" }
            div { style: "font-size: 1.25rem; font-weight: bold; color: {color};", "{value}" }
        }
    }
}
