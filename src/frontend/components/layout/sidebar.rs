//! Collapsible navigation sidebar.

use crate::frontend::app::Route;
use crate::frontend::services::guard::paths;
use crate::frontend::services::session::{Role, clear_login};
use crate::frontend::services::storage::Storage;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

/// Protected sections in sidebar order.
fn nav_items() -> Vec<(Route, &'static str)> {
    vec![
        (Route::Dashboard {}, "Dashboard"),
        (Route::Events {}, "Events"),
        (Route::AddEvent {}, "Add Event"),
        (Route::MyEvents {}, "My Events"),
        (Route::EventRegistration {}, "Registrations"),
        (Route::Attendance {}, "Attendance"),
        (Route::TrainerAllocation {}, "Trainers"),
        (Route::Notifications {}, "Notifications"),
        (Route::Feedback {}, "Feedback"),
        (Route::Analytics {}, "Analytics"),
        (Route::Profile {}, "Profile"),
        (Route::ChangePassword {}, "Change Password"),
    ]
}

#[component]
pub fn Sidebar(is_open: Signal<bool>, role: Option<Role>) -> Element {
    let nav = navigator();
    let current = use_route::<Route>();

    // Entries the current role cannot reach are hidden rather than disabled.
    let items: Vec<(Route, &'static str)> = nav_items()
        .into_iter()
        .filter(|(route, _)| route.required_role().permits(role))
        .collect();

    rsx! {
        nav { class: if is_open() { "sidebar open" } else { "sidebar closed" },
            div { class: "sidebar-brand", "CEPS" }

            ul { class: "nav-items",
                for (route, label) in items {
                    li {
                        key: "{route}",
                        class: if route == current { "nav-item active" } else { "nav-item" },
                        onclick: {
                            let route = route.clone();
                            move |_| {
                                nav.push(route.clone());
                            }
                        },
                        span { class: "nav-text", "{label}" }
                    }
                }
            }

            div {
                class: "nav-item logout",
                onclick: move |_| {
                    spawn(async move {
                        let mut storage = Storage::load();
                        clear_login(&mut storage);
                        if let Err(e) = storage.save().await {
                            log::error!("Failed to clear saved session: {e}");
                        }
                        nav.push(paths::LOGIN);
                    });
                },
                span { class: "nav-text", "Logout" }
            }
        }
    }
}
