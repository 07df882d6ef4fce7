//! Page header with title and sidebar toggle.

use dioxus::prelude::*;

#[component]
pub fn Header(title: &'static str, mut is_open: Signal<bool>) -> Element {
    rsx! {
        header { class: "page-header",
            button {
                class: "sidebar-toggle",
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                "☰"
            }
            h1 { class: "page-title", "{title}" }
        }
    }
}
