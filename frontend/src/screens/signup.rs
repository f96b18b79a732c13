use dioxus::prelude::*;
use safepay_client_core::auth;
use safepay_client_core::validation::SignupForm;
use crate::app::{use_api_client, use_navigator};
use crate::routes::Route;
use crate::theme::{spacing, AppColors};
use crate::widgets::{BottomWarning, Button, Card, Heading, InputBox, Page, SubHeading};

#[component]
pub fn SignupScreen(is_dark: bool) -> Element {
    let client = use_api_client();
    let navigator = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let destructive = AppColors::destructive(is_dark);
    let submit_label = if loading() { "Creating account…" } else { "Sign up" };

    rsx! {
        Page { is_dark,
            div { style: "min-height: 100vh; display: flex; justify-content: center; align-items: center;",
                div { style: "width: {spacing::FORM_WIDTH}; text-align: center;",
                    Card { is_dark,
                        Heading { label: "Sign up" }
                        SubHeading { is_dark, label: "Enter your information to create an account" }
                        InputBox {
                            is_dark,
                            label: "First Name",
                            placeholder: "John",
                            value: first_name(),
                            oninput: move |v| first_name.set(v),
                        }
                        InputBox {
                            is_dark,
                            label: "Last Name",
                            placeholder: "Wick",
                            value: last_name(),
                            oninput: move |v| last_name.set(v),
                        }
                        InputBox {
                            is_dark,
                            label: "Email",
                            placeholder: "example@gmail.com",
                            value: username(),
                            oninput: move |v| username.set(v),
                        }
                        InputBox {
                            is_dark,
                            label: "Password",
                            placeholder: "At least 8 characters",
                            input_type: "password",
                            value: password(),
                            oninput: move |v| password.set(v),
                        }
                        if let Some(e) = error() {
                            p { style: "color: {destructive}; font-size: 0.875rem; margin-top: 12px;", "{e}" }
                        }
                        div { style: "padding-top: 16px;",
                            Button {
                                label: "{submit_label}",
                                disabled: loading(),
                                onclick: move |_| {
                                    let form = SignupForm {
                                        first_name: first_name(),
                                        last_name: last_name(),
                                        username: username(),
                                        password: password(),
                                    };
                                    let client = client.clone();
                                    loading.set(true);
                                    error.set(None);
                                    spawn(async move {
                                        let result = auth::register(&client, &form).await;
                                        loading.set(false);
                                        match result {
                                            Ok(_) => navigator.go(Route::Dashboard),
                                            Err(e) => error.set(e.user_message("Sign up failed. Please try again.")),
                                        }
                                    });
                                },
                            }
                        }
                        BottomWarning {
                            is_dark,
                            label: "Already have an account?",
                            button_text: "Sign in",
                            to: Route::Signin,
                        }
                    }
                }
            }
        }
    }
}
