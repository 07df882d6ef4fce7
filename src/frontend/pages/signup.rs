//! Signup page. Account creation lives server-side; this form only collects
//! the fields and funnels the visitor to the login page.

use crate::frontend::assets::APP_CSS;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut show_error = use_signal(|| false);

    rsx! {
        style { dangerous_inner_html: APP_CSS }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Create your CEPS account" }

                input {
                    class: "auth-input",
                    r#type: "text",
                    placeholder: "Full name",
                    value: "{name()}",
                    oninput: move |e| {
                        name.set(e.value());
                        show_error.set(false);
                    }
                }
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

                if show_error() {
                    p { class: "auth-error", "Name and email are required." }
                }

                button {
                    class: "auth-submit",
                    onclick: move |_| {
                        if name.read().trim().is_empty() || email.read().trim().is_empty() {
                            show_error.set(true);
                        } else {
                            nav.push("/login");
                        }
                    },
                    "Signup"
                }

                p { class: "auth-switch",
                    "Already registered? "
                    a {
                        onclick: move |_| {
                            nav.push("/login");
                        },
                        "Login"
                    }
                }
            }
        }
    }
}
