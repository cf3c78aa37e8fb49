//! Login and registration forms shown before authentication.

use crate::state::AppState;
use cs_core::Event as DashboardEvent;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

const TAB_ACTIVE: &str =
    "padding: 8px 16px; border: none; border-bottom: 3px solid #1565C0; background: none; font-weight: bold; cursor: pointer;";
const TAB_IDLE: &str = "padding: 8px 16px; border: none; border-bottom: 3px solid transparent; background: none; cursor: pointer;";
const FIELD: &str = "display: block; width: 100%; padding: 6px; margin: 4px 0 12px 0; box-sizing: border-box;";

/// Tabbed login/register panel.
#[component]
pub fn AuthTabs() -> Element {
    let mut tab = use_signal(|| AuthTab::Login);
    let current = tab();

    rsx! {
        div {
            style: "max-width: 420px; margin: 0 auto;",
            div {
                style: "display: flex; gap: 4px; margin-bottom: 16px; border-bottom: 1px solid #ddd;",
                button {
                    style: if current == AuthTab::Login { TAB_ACTIVE } else { TAB_IDLE },
                    onclick: move |_| tab.set(AuthTab::Login),
                    "Login"
                }
                button {
                    style: if current == AuthTab::Register { TAB_ACTIVE } else { TAB_IDLE },
                    onclick: move |_| tab.set(AuthTab::Register),
                    "Register"
                }
            }
            if current == AuthTab::Login {
                LoginForm {}
            } else {
                RegisterForm {}
            }
        }
    }
}

/// Username/password form that dispatches `LoginSubmitted`.
#[component]
pub fn LoginForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.dispatch(DashboardEvent::LoginSubmitted {
            username: username(),
            password: password(),
        });
    };

    rsx! {
        form {
            onsubmit: on_submit,
            label { "Username" }
            input {
                style: FIELD,
                value: "{username}",
                oninput: move |evt: Event<FormData>| username.set(evt.value()),
            }
            label { "Password" }
            input {
                r#type: "password",
                style: FIELD,
                value: "{password}",
                oninput: move |evt: Event<FormData>| password.set(evt.value()),
            }
            button { r#type: "submit", "Login" }
        }
    }
}

/// New-account form that dispatches `RegisterSubmitted`.
#[component]
pub fn RegisterForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.dispatch(DashboardEvent::RegisterSubmitted {
            username: username(),
            email: email(),
            password: password(),
            confirm_password: confirm(),
        });
    };

    rsx! {
        form {
            onsubmit: on_submit,
            label { "New Username" }
            input {
                style: FIELD,
                value: "{username}",
                oninput: move |evt: Event<FormData>| username.set(evt.value()),
            }
            label { "Email" }
            input {
                r#type: "email",
                style: FIELD,
                value: "{email}",
                oninput: move |evt: Event<FormData>| email.set(evt.value()),
            }
            label { "New Password" }
            input {
                r#type: "password",
                style: FIELD,
                value: "{password}",
                oninput: move |evt: Event<FormData>| password.set(evt.value()),
            }
            label { "Confirm Password" }
            input {
                r#type: "password",
                style: FIELD,
                value: "{confirm}",
                oninput: move |evt: Event<FormData>| confirm.set(evt.value()),
            }
            button { r#type: "submit", "Register" }
        }
    }
}
