//! Protected section pages.
//!
//! Bodies are placeholders: the routing shell treats page content as an
//! opaque render target, and the real sections call backend APIs this
//! client does not define.

use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Overview of upcoming events, registrations and pending approvals." }
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Browse the event and program catalogue." }
        }
    }
}

#[component]
pub fn AddEvent() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Create a new event or program." }
        }
    }
}

#[component]
pub fn MyEvents() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Events you are registered for." }
        }
    }
}

#[component]
pub fn EventRegistration() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Review and approve event registrations." }
        }
    }
}

#[component]
pub fn Attendance() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Record and review attendance." }
        }
    }
}

#[component]
pub fn TrainerAllocation() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Assign trainers to sessions." }
        }
    }
}

#[component]
pub fn Notifications() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Announcements and alerts." }
        }
    }
}

#[component]
pub fn Feedback() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Collect and review participant feedback." }
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Participation and engagement metrics." }
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Your account details." }
        }
    }
}

#[component]
pub fn ChangePassword() -> Element {
    rsx! {
        section { class: "page-placeholder",
            p { "Update your password." }
        }
    }
}

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let attempted = route.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "404 — Page Not Found" }
            p { "No page at /{attempted}" }
        }
    }
}
