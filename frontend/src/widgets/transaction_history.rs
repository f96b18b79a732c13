use dioxus::prelude::*;
use safepay_client_core::format::{format_timestamp, signed_amount};
use safepay_client_core::models::{Transaction, TransactionFilter, TransactionKind};
use crate::app::use_api_client;
use crate::theme::AppColors;
use crate::widgets::Card;

pub const PAGE_SIZE: u32 = 10;

/// Filterable, paged list of the signed-in user's transfers.
#[component]
pub fn TransactionHistory(is_dark: bool, refresh: Signal<u32>) -> Element {
    let client = use_api_client();
    let mut page = use_signal(|| 1u32);
    let mut filter = use_signal(TransactionFilter::default);

    let history = use_resource(move || {
        let client = client.clone();
        let (page, filter) = (page(), filter());
        let _ = refresh();
        async move { client.get_transactions(page, PAGE_SIZE, filter).await }
    });

    let primary = AppColors::primary(is_dark);
    let muted = AppColors::muted(is_dark);
    let destructive = AppColors::destructive(is_dark);
    let on_primary = AppColors::ON_PRIMARY;

    let body = match &*history.read_unchecked() {
        None => rsx! {
            div { style: "text-align: center; padding: 48px 0; color: {muted};", "Loading transactions..." }
        },
        Some(Err(e)) => match e.user_message("Failed to fetch transactions") {
            Some(message) => rsx! {
                div { style: "color: {destructive}; font-size: 0.875rem;", "{message}" }
            },
            None => rsx! {},
        },
        Some(Ok(resp)) if resp.transactions.is_empty() => rsx! {
            div { style: "text-align: center; padding: 48px 0; color: {muted};", "No transactions found" }
        },
        Some(Ok(resp)) => {
            let pages = resp.pagination.pages.max(1);
            let current = page();
            rsx! {
                div { style: "display: flex; flex-direction: column; gap: 12px;",
                    for tx in resp.transactions.iter().cloned() {
                        TransactionRow { key: "{tx.id}", is_dark, tx }
                    }
                }
                if pages > 1 {
                    div { style: "display: flex; align-items: center; justify-content: center; gap: 8px; padding-top: 16px;",
                        PagerButton {
                            label: "Previous",
                            disabled: current <= 1,
                            onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                        }
                        span { style: "color: {muted};", "Page {current} of {pages}" }
                        PagerButton {
                            label: "Next",
                            disabled: current >= pages,
                            onclick: move |_| page.set((current + 1).min(pages)),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Card { is_dark,
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                div { style: "font-weight: bold; font-size: 1.5rem;", "Transaction History" }
                div { style: "display: flex; gap: 8px;",
                    for f in TransactionFilter::ALL {
                        button {
                            key: "{f.label()}",
                            onclick: move |_| {
                                filter.set(f);
                                page.set(1);
                            },
                            style: "{filter_tab_style(filter() == f, primary, on_primary)}",
                            "{f.label()}"
                        }
                    }
                }
            }
            {body}
        }
    }
}

fn filter_tab_style(active: bool, primary: &str, on_primary: &str) -> String {
    let (background, color) = if active {
        (primary, on_primary)
    } else {
        ("rgba(16,185,129,0.12)", "inherit")
    };
    format!(
        "padding: 8px 16px; border-radius: 12px; border: none; font-size: 0.875rem; font-weight: 500; cursor: pointer; background: {}; color: {};",
        background, color
    )
}

#[component]
fn TransactionRow(is_dark: bool, tx: Transaction) -> Element {
    let border = AppColors::border(is_dark);
    let muted = AppColors::muted(is_dark);
    let (verb, arrow, color) = match tx.kind {
        TransactionKind::Sent => ("Sent to", "→", AppColors::destructive(is_dark)),
        TransactionKind::Received => ("Received from", "←", AppColors::primary(is_dark)),
    };
    let other = tx.counterparty().full_name();
    rsx! {
        div { style: "display: flex; align-items: center; gap: 16px; padding: 16px; border: 1px solid {border}; border-radius: 12px;",
            div { style: "height: 48px; width: 48px; border-radius: 12px; display: flex; align-items: center; justify-content: center; font-size: 1.25rem; color: {color}; background: rgba(0,0,0,0.04);",
                "{arrow}"
            }
            div { style: "flex: 1;",
                div { style: "font-weight: 600;", "{verb} {other}" }
                if !tx.description.is_empty() {
                    div { style: "font-size: 0.875rem; color: {muted};", "{tx.description}" }
                }
                div { style: "font-size: 0.75rem; color: {muted}; margin-top: 4px;", "{format_timestamp(&tx.timestamp)}" }
            }
            div { style: "font-size: 1.125rem; font-weight: bold; color: {color};", "{signed_amount(&tx)}" }
        }
    }
}

#[component]
fn PagerButton(label: String, disabled: bool, onclick: EventHandler<()>) -> Element {
    let opacity = if disabled { "0.5" } else { "1" };
    rsx! {
        button {
            disabled,
            onclick: move |_| onclick.call(()),
            style: "padding: 8px 16px; border-radius: 12px; border: none; background: rgba(16,185,129,0.12); color: inherit; opacity: {opacity}; cursor: pointer;",
            "{label}"
        }
    }
}
