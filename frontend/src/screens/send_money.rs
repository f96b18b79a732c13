use dioxus::prelude::*;
use safepay_client_core::client_log;
use safepay_client_core::debounce::sleep;
use safepay_client_core::format::format_inr;
use safepay_client_core::transfer::{
    submit_transfer, transfer_failure, TransferSummary, AUTH_REDIRECT_DELAY, SUCCESS_REDIRECT_DELAY,
};
use crate::app::{use_api_client, use_navigator};
use crate::routes::Route;
use crate::theme::{spacing, AppColors};
use crate::widgets::{Button, Card, Heading, InputBox, Page};

#[component]
pub fn SendMoneyScreen(is_dark: bool, recipient_id: String, recipient_name: String) -> Element {
    let client = use_api_client();
    let navigator = use_navigator();
    let mut balance = use_signal(|| Option::<f64>::None);
    let mut amount = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<TransferSummary>::None);

    use_future({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_balance().await {
                    Ok(b) => balance.set(Some(b.balance)),
                    Err(e) => error.set(e.user_message("Failed to fetch balance")),
                }
            }
        }
    });

    let primary = AppColors::primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let destructive = AppColors::destructive(is_dark);
    let on_primary = AppColors::ON_PRIMARY;
    let initial = recipient_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let balance_text = balance().map(format_inr).unwrap_or_else(|| "Loading...".to_string());
    let submit_label = if loading() { "Processing…" } else { "Initiate Transfer" };

    let recipient = (recipient_id.clone(), recipient_name.clone());
    let on_submit = move |_: ()| {
        let client = client.clone();
        let (id, name) = recipient.clone();
        let (amount_input, note) = (amount(), description());
        let current_balance = balance();
        loading.set(true);
        error.set(None);
        spawn(async move {
            let result = submit_transfer(&client, &id, &name, &amount_input, &note, current_balance).await;
            loading.set(false);
            match result {
                Ok(summary) => {
                    if let Some(b) = summary.new_balance {
                        balance.set(Some(b));
                    }
                    success.set(Some(summary));
                    sleep(SUCCESS_REDIRECT_DELAY).await;
                    navigator.go(Route::Dashboard);
                }
                Err(e) => {
                    let Some(failure) = transfer_failure(&e) else {
                        return;
                    };
                    error.set(Some(failure.message));
                    if failure.redirect_to_signin {
                        sleep(AUTH_REDIRECT_DELAY).await;
                        if let Err(e) = client.logout() {
                            client_log!("[safepay] logout failed: {}", e);
                        }
                        navigator.go(Route::Signin);
                    }
                }
            }
        });
    };

    rsx! {
        Page { is_dark,
            div { style: "min-height: 100vh; display: flex; justify-content: center; align-items: center;",
                div { style: "width: {spacing::FORM_WIDTH};",
                    Card { is_dark,
                        div { style: "text-align: center;", Heading { label: "Send Money" } }
                        div { style: "display: flex; align-items: center; gap: 16px; margin: 24px 0;",
                            div { style: "width: 48px; height: 48px; border-radius: 50%; background: {primary}; color: {on_primary}; display: flex; align-items: center; justify-content: center; font-size: 1.5rem;",
                                "{initial}"
                            }
                            h3 { style: "font-size: 1.5rem; font-weight: 600; margin: 0;", "{recipient_name}" }
                        }
                        div { style: "font-size: 0.875rem; color: {muted}; margin-bottom: 8px;", "Available balance: {balance_text}" }
                        if let Some(s) = success() {
                            div { style: "padding: 16px; border-radius: 12px; border: 1px solid {primary}; margin-bottom: 16px;",
                                div { style: "font-weight: 600; color: {primary};", "{s.message}" }
                                div { "{format_inr(s.amount)} sent to {s.receiver_name}" }
                                if let Some(b) = s.new_balance {
                                    div { style: "color: {muted};", "New balance: {format_inr(b)}" }
                                }
                                div { style: "font-size: 0.75rem; color: {muted}; margin-top: 8px;", "Redirecting to dashboard..." }
                            }
                        } else {
                            InputBox {
                                is_dark,
                                label: "Amount (in ₹)",
                                placeholder: "Enter amount",
                                input_type: "number",
                                value: amount(),
                                oninput: move |v| amount.set(v),
                            }
                            InputBox {
                                is_dark,
                                label: "Description (optional)",
                                placeholder: "What's it for?",
                                value: description(),
                                oninput: move |v| description.set(v),
                            }
                            if let Some(e) = error() {
                                p { style: "color: {destructive}; font-size: 0.875rem; margin-top: 12px;", "{e}" }
                            }
                            div { style: "padding-top: 16px;",
                                Button {
                                    label: "{submit_label}",
                                    disabled: loading(),
                                    background: primary.to_string(),
                                    onclick: on_submit,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
