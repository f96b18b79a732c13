use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(is_dark: bool, children: Element) -> Element {
    let surface = AppColors::card(is_dark);
    let border = AppColors::border(is_dark);
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: {spacing::CARD_RADIUS}; padding: {spacing::CARD_PADDING}; box-shadow: 0 4px 16px rgba(0,0,0,0.08);",
            {children}
        }
    }
}
