use dioxus::prelude::*;

#[component]
pub fn Heading(label: String) -> Element {
    rsx! {
        div { style: "font-weight: bold; font-size: 2.25rem; padding-top: 24px;", "{label}" }
    }
}
