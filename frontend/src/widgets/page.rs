use dioxus::prelude::*;
use crate::theme::AppColors;

/// Full-height themed backdrop every screen renders into.
#[component]
pub fn Page(is_dark: bool, children: Element) -> Element {
    let background = AppColors::background(is_dark);
    let foreground = AppColors::foreground(is_dark);
    rsx! {
        div {
            style: "min-height: 100vh; background: {background}; color: {foreground};",
            {children}
        }
    }
}
