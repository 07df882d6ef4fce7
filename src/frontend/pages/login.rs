//! Login page.
//!
//! There is no backend in this client: a successful submit mints a local
//! opaque token and persists the session keys the rest of the app reads.

use crate::frontend::assets::APP_CSS;
use crate::frontend::services::session::{Role, store_login};
use crate::frontend::services::storage::Storage;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

/// Opaque stand-in for a server-issued token.
fn issue_local_token() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    format!("local-{nanos:x}")
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut show_error = use_signal(|| false);

    let on_submit = move |_| {
        if email.read().trim().is_empty() || password.read().is_empty() {
            show_error.set(true);
            return;
        }
        let selected = role();
        spawn(async move {
            let mut storage = Storage::load();
            store_login(&mut storage, &issue_local_token(), selected);
            if let Err(e) = storage.save().await {
                log::error!("Failed to persist session: {e}");
            }
            // Root dispatch sends the fresh session to its default section.
            nav.push("/");
        });
    };

    rsx! {
        style { dangerous_inner_html: APP_CSS }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Login to CEPS" }

                input {
                    class: "auth-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email()}",
                    oninput: move |e| {
                        email.set(e.value());
                        show_error.set(false);
                    }
                }
                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password()}",
                    oninput: move |e| {
                        password.set(e.value());
                        show_error.set(false);
                    }
                }
                select {
                    class: "auth-input",
                    onchange: move |e| {
                        role.set(Role::parse(&e.value()).unwrap_or(Role::Student));
                    },
                    option { value: "student", "Student" }
                    option { value: "faculty", "Faculty" }
                    option { value: "admin", "Admin" }
                }

                if show_error() {
                    p { class: "auth-error", "Email and password are required." }
                }

                button { class: "auth-submit", onclick: on_submit, "Login" }

                p { class: "auth-switch",
                    "New to CEPS? "
                    a {
                        onclick: move |_| {
                            nav.push("/signup");
                        },
                        "Create an account"
                    }
                }
            }
        }
    }
}
