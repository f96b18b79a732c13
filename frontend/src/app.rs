use dioxus::prelude::*;
use safepay_client_core::{client_log, default_client, ApiClient};

use crate::routes::{resolve, Route};
use crate::screens::{DashboardScreen, SendMoneyScreen, SigninScreen, SignupScreen};

/// Route handle shared through context. Backed by a sync signal so the API client's
/// session hook, which must be `Send + Sync`, can redirect as well.
#[derive(Clone, Copy)]
pub struct Navigator {
    route: Signal<Route, SyncStorage>,
}

impl Navigator {
    pub fn go(&self, to: Route) {
        log::debug!("[safepay] navigate to {}", to.path());
        browser::push_path(&to.path());
        let mut route = self.route;
        route.set(to);
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>()
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
pub fn App() -> Element {
    let route = use_signal_sync(|| {
        browser::current_path()
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Root)
    });
    let navigator = use_context_provider(|| Navigator { route });
    let client = use_context_provider(move || {
        default_client().with_session_hook(move || {
            client_log!("[safepay] session expired, redirecting to signin");
            navigator.go(Route::Signin);
            // web: reload at /signin so no screen keeps stale user data in memory
            browser::load_page(&Route::Signin.path());
        })
    });
    let mut is_dark = use_signal(|| false);

    let requested = route();
    let current = resolve(requested.clone(), client.auth().is_authenticated());
    if current != requested {
        browser::replace_path(&current.path());
    }

    let toggle_theme = move |_: ()| is_dark.set(!is_dark());
    let current_screen = match current {
        Route::Signup => rsx! { SignupScreen { is_dark: is_dark() } },
        Route::Dashboard => rsx! {
            DashboardScreen { is_dark: is_dark(), on_toggle_theme: toggle_theme }
        },
        Route::Send { id, name } => rsx! {
            SendMoneyScreen { is_dark: is_dark(), recipient_id: id, recipient_name: name }
        },
        // `resolve` never yields Root
        Route::Signin | Route::Root => rsx! { SigninScreen { is_dark: is_dark() } },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}

/// Keeps the address bar in step with the current route. No-ops off the web.
mod browser {
    #[cfg(target_arch = "wasm32")]
    pub fn current_path() -> Option<String> {
        let location = web_sys::window()?.location();
        let path = location.pathname().ok()?;
        let search = location.search().unwrap_or_default();
        Some(format!("{}{}", path, search))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn push_path(path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn replace_path(path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_page(path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::warn!("[safepay] full navigation to {} failed: {:?}", path, e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn current_path() -> Option<String> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn push_path(_path: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn replace_path(_path: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_page(_path: &str) {}
}
