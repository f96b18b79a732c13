use dioxus::prelude::*;
use safepay_client_core::format::{format_amount, CURRENCY_SYMBOL};
use crate::theme::AppColors;
use crate::widgets::Card;

#[component]
pub fn Balance(is_dark: bool, value: f64, #[props(default)] loading: bool) -> Element {
    let muted = AppColors::muted(is_dark);
    rsx! {
        Card { is_dark,
            if loading {
                div { style: "display: flex; align-items: center; gap: 16px;",
                    div { style: "font-weight: bold; font-size: 1.125rem; color: {muted};", "Your Balance" }
                    div { style: "font-weight: 600; font-size: 1.125rem; color: {muted};", "Loading..." }
                }
            } else {
                div { style: "font-size: 0.875rem; font-weight: 500; opacity: 0.8; margin-bottom: 8px;", "Your Balance" }
                div { style: "font-size: 2.25rem; font-weight: bold;", "{CURRENCY_SYMBOL} {format_amount(value)}" }
            }
        }
    }
}
