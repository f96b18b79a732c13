use dioxus::prelude::*;
use crate::theme::AppColors;

const MOON: &str = "M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z";
const SUN: &str = "M10 2a1 1 0 011 1v2a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zM2 10a1 1 0 011 1v2a1 1 0 11-2 0v-2a1 1 0 011-1zm14 1a1 1 0 011 1v2a1 1 0 11-2 0v-2a1 1 0 011-1z";

#[component]
pub fn ThemeToggle(is_dark: bool, on_toggle: EventHandler<()>) -> Element {
    let (icon, title) = if is_dark { (SUN, "Switch to light mode") } else { (MOON, "Switch to dark mode") };
    let foreground = AppColors::foreground(is_dark);
    let card = AppColors::card(is_dark);
    rsx! {
        button {
            onclick: move |_| on_toggle.call(()),
            title: "{title}",
            aria_label: "{title}",
            style: "width: 40px; height: 40px; display: inline-flex; align-items: center; justify-content: center; border-radius: 8px; border: none; background: {card}; color: {foreground}; cursor: pointer;",
            svg { width: "20", height: "20", fill: "currentColor", view_box: "0 0 20 20",
                path { d: "{icon}" }
            }
        }
    }
}
