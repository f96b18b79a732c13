use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn SubHeading(is_dark: bool, label: String) -> Element {
    let muted = AppColors::muted(is_dark);
    rsx! {
        div { style: "color: {muted}; font-size: 0.875rem; padding: 4px 0 8px;", "{label}" }
    }
}
