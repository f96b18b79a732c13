use dioxus::prelude::*;
use crate::theme::AppColors;

/// Labelled text input. `oninput` receives the full current value.
#[component]
pub fn InputBox(
    is_dark: bool,
    label: String,
    placeholder: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    oninput: EventHandler<String>,
) -> Element {
    let foreground = AppColors::foreground(is_dark);
    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);
    rsx! {
        div {
            div { style: "font-size: 0.875rem; font-weight: 500; text-align: left; padding: 8px 0;", "{label}" }
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |ev| oninput.call(ev.value()),
                style: "width: 100%; padding: 12px 16px; border-radius: 12px; border: 1px solid {border}; background: {background}; color: {foreground}; box-sizing: border-box;",
            }
        }
    }
}
