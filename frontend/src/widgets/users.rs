use dioxus::prelude::*;
use safepay_client_core::debounce::{Debouncer, SEARCH_DEBOUNCE};
use safepay_client_core::models::User;
use crate::app::{use_api_client, use_navigator};
use crate::routes::Route;
use crate::theme::AppColors;
use crate::widgets::{Button, Card};

/// Searchable user directory. Typing is debounced; only the last keystroke in a
/// burst queries the server.
#[component]
pub fn Users(is_dark: bool) -> Element {
    let client = use_api_client();
    let debouncer = use_hook(Debouncer::new);
    let mut filter = use_signal(String::new);
    let mut users = use_signal(Vec::<User>::new);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let query = filter();
        let client = client.clone();
        let debouncer = debouncer.clone();
        spawn(async move {
            if !debouncer.debounce(SEARCH_DEBOUNCE).await {
                return;
            }
            let result = client.search_users(&query).await;
            // a newer query may have started while this one was in flight
            if *filter.peek() != query {
                return;
            }
            match result {
                Ok(resp) => {
                    error.set(None);
                    users.set(resp.user);
                }
                Err(e) => {
                    log::error!("[safepay] error fetching users: {}", e);
                    error.set(e.user_message("Failed to load users"));
                }
            }
        });
    });

    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);
    let destructive = AppColors::destructive(is_dark);

    rsx! {
        Card { is_dark,
            div { style: "font-weight: bold; font-size: 1.125rem;", "Users" }
            div { style: "margin: 8px 0;",
                input {
                    r#type: "text",
                    placeholder: "Search users...",
                    value: "{filter}",
                    oninput: move |ev| filter.set(ev.value()),
                    style: "width: 100%; padding: 8px 12px; border-radius: 8px; border: 1px solid {border}; background: {background}; color: inherit; box-sizing: border-box;",
                }
            }
            if let Some(e) = error() {
                p { style: "color: {destructive}; font-size: 0.875rem;", "{e}" }
            }
            for user in users() {
                UserRow { key: "{user.id}", is_dark, user: user.clone() }
            }
        }
    }
}

#[component]
fn UserRow(is_dark: bool, user: User) -> Element {
    let navigator = use_navigator();
    let border = AppColors::border(is_dark);
    let initial: String = user.first_name.chars().next().map(|c| c.to_string()).unwrap_or_default();
    let full_name = user.full_name();
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 4px 0;",
            div { style: "display: flex; align-items: center;",
                div { style: "height: 48px; width: 48px; border-radius: 50%; background: {border}; display: flex; align-items: center; justify-content: center; font-size: 1.25rem; margin-right: 8px;",
                    "{initial}"
                }
                div { "{full_name}" }
            }
            div { style: "width: 140px;",
                Button {
                    label: "Send Money",
                    onclick: move |_| navigator.go(Route::Send {
                        id: user.id.clone(),
                        name: user.first_name.clone(),
                    }),
                }
            }
        }
    }
}
