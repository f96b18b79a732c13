use dioxus::prelude::*;
use safepay_client_core::client_log;
use crate::app::{use_api_client, use_navigator};
use crate::routes::Route;
use crate::theme::AppColors;
use crate::widgets::ThemeToggle;

#[component]
pub fn Appbar(is_dark: bool, on_toggle_theme: EventHandler<()>) -> Element {
    let client = use_api_client();
    let navigator = use_navigator();
    let profile = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.get_profile().await.map(|r| r.user) }
        }
    });

    let card = AppColors::card(is_dark);
    let border = AppColors::border(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::ON_PRIMARY;

    let user_block = match &*profile.read_unchecked() {
        None => rsx! {
            div { style: "height: 32px; width: 96px; border-radius: 4px; background: {border};" }
        },
        Some(Ok(p)) => rsx! {
            div { style: "display: flex; flex-direction: column; align-items: flex-end;",
                div { style: "font-size: 0.875rem; font-weight: 500;", "{p.user.full_name()}" }
                div { style: "font-size: 0.75rem; color: {muted};", "Welcome back!" }
            }
            div { style: "height: 40px; width: 40px; border-radius: 12px; background: {primary}; color: {on_primary}; display: flex; align-items: center; justify-content: center; font-weight: 600; font-size: 0.875rem;",
                "{p.user.initials()}"
            }
        },
        Some(Err(e)) => {
            log::warn!("[safepay] appbar: failed to fetch user info: {}", e);
            rsx! {}
        }
    };

    rsx! {
        div { style: "position: sticky; top: 0; z-index: 50; background: {card}; border-bottom: 1px solid {border};",
            div { style: "height: 64px; display: flex; justify-content: space-between; align-items: center; padding: 0 24px; max-width: 1100px; margin: 0 auto;",
                div { style: "font-weight: bold; font-size: 1.25rem; color: {primary};", "Saf$pay" }
                div { style: "display: flex; align-items: center; gap: 16px;",
                    {user_block}
                    ThemeToggle { is_dark, on_toggle: move |_| on_toggle_theme.call(()) }
                    button {
                        onclick: move |_| {
                            if let Err(e) = client.logout() {
                                client_log!("[safepay] logout failed: {}", e);
                            }
                            navigator.go(Route::Signin);
                        },
                        style: "padding: 8px 16px; font-size: 0.875rem; font-weight: 500; border-radius: 8px; border: 1px solid {border}; background: transparent; color: inherit; cursor: pointer;",
                        "Logout"
                    }
                }
            }
        }
    }
}
