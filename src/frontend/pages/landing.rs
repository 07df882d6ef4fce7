//! Marketing landing page shown to unauthenticated visitors at `/`.

use crate::frontend::assets::APP_CSS;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        style { dangerous_inner_html: APP_CSS }

        div { class: "landing",
            div { class: "landing-hero",
                h1 { class: "landing-title", "Welcome to CEPS" }
                p { class: "landing-tagline",
                    "The Comprehensive Event & Program System, a modern platform to manage "
                    "events, attendance, trainers, and analytics with efficiency and style."
                }
                div { class: "landing-actions",
                    button {
                        class: "landing-button primary",
                        onclick: move |_| {
                            nav.push("/login");
                        },
                        "Login"
                    }
                    button {
                        class: "landing-button secondary",
                        onclick: move |_| {
                            nav.push("/signup");
                        },
                        "Signup"
                    }
                }
            }

            div { class: "landing-info",
                h2 { "Why Choose CEPS?" }
                p {
                    "Plan programs, track attendance, allocate trainers and review "
                    "analytics from a single place, with access tailored to students, "
                    "faculty and administrators."
                }
            }
        }
    }
}
