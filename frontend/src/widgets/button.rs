use dioxus::prelude::*;

#[component]
pub fn Button(
    label: String,
    #[props(default)] disabled: bool,
    #[props(default = "#1F2937".to_string())] background: String,
    onclick: EventHandler<()>,
) -> Element {
    let opacity = if disabled { "0.6" } else { "1" };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            r#type: "button",
            disabled,
            onclick: move |_| onclick.call(()),
            style: "width: 100%; padding: 10px 20px; border-radius: 8px; border: none; background: {background}; color: #FFFFFF; font-weight: 500; font-size: 0.875rem; opacity: {opacity}; cursor: {cursor};",
            "{label}"
        }
    }
}
