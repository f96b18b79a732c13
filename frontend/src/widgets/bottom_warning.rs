use dioxus::prelude::*;
use crate::app::use_navigator;
use crate::routes::Route;
use crate::theme::AppColors;

/// "Already have an account? Sign in" style footer link.
#[component]
pub fn BottomWarning(is_dark: bool, label: String, button_text: String, to: Route) -> Element {
    let navigator = use_navigator();
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    rsx! {
        div { style: "display: flex; justify-content: center; align-items: center; gap: 4px; padding: 8px 0; font-size: 0.875rem; color: {muted};",
            span { "{label}" }
            button {
                onclick: move |_| navigator.go(to.clone()),
                style: "background: none; border: none; padding-left: 4px; color: {primary}; text-decoration: underline; font-weight: 500; cursor: pointer;",
                "{button_text}"
            }
        }
    }
}
