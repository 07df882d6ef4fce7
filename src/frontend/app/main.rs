//! Application routing system.
//!
//! The route table is the `Route` enum: one variant per path, with the role
//! constraint and layout title looked up per variant. Protected routes sit
//! under the [`Protected`] layout, which re-checks the session on every
//! navigation.

use crate::frontend::components::layout::PageLayout;
use crate::frontend::pages::{
    AddEvent, Analytics, Attendance, ChangePassword, Dashboard, EventRegistration, Events,
    Feedback, Landing, Login, MyEvents, Notifications, PageNotFound, Profile, Signup,
    TrainerAllocation,
};
use crate::frontend::services::guard::{Access, RequiredRole, RootView, authorize, dispatch_root};
use crate::frontend::services::session::{Role, Session};

use dioxus::prelude::*;
use dioxus_router::{Routable, components::Outlet, navigator, use_route};

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Landing page or role-based redirect, resolved by [`Root`].
    #[route("/")]
    Root {},
    /// Always-public authentication pages.
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    /// Login-gated sections, wrapped in the sidebar/header layout.
    #[layout(Protected)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/events")]
    Events {},
    #[route("/add-event")]
    AddEvent {},
    #[route("/my-events")]
    MyEvents {},
    #[route("/event-registration")]
    EventRegistration {},
    #[route("/attendance")]
    Attendance {},
    #[route("/trainer-allocation")]
    TrainerAllocation {},
    #[route("/notifications")]
    Notifications {},
    #[route("/feedback")]
    Feedback {},
    #[route("/analytics")]
    Analytics {},
    #[route("/profile")]
    Profile {},
    #[route("/change-password")]
    ChangePassword {},
    #[end_layout]
    /// Catch-all: unmatched paths render the static not-found view.
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

const FACULTY_ADMIN: &[Role] = &[Role::Faculty, Role::Admin];

impl Route {
    /// Role constraint for the route, fixed at the table boundary.
    pub fn required_role(&self) -> RequiredRole {
        match self {
            Self::AddEvent {} | Self::EventRegistration {} | Self::Analytics {} => {
                RequiredRole::AnyOf(FACULTY_ADMIN)
            }
            Self::MyEvents {} => RequiredRole::One(Role::Student),
            _ => RequiredRole::Any,
        }
    }

    /// Layout title for protected sections.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard {} => "Dashboard Overview",
            Self::Events {} => "Events & Programs",
            Self::AddEvent {} => "Add Event",
            Self::MyEvents {} => "My Registered Events",
            Self::EventRegistration {} => "Event Registration & Approval",
            Self::Attendance {} => "Attendance Management",
            Self::TrainerAllocation {} => "Trainer Allocation",
            Self::Notifications {} => "Notifications",
            Self::Feedback {} => "Feedback Management",
            Self::Analytics {} => "Analytics Dashboard",
            Self::Profile {} => "User Profile",
            Self::ChangePassword {} => "Change Password",
            _ => "",
        }
    }
}

/// Resolves `/`: unauthenticated visitors get the landing page, everyone
/// else is redirected to their role's default section.
#[component]
pub fn Root() -> Element {
    let nav = navigator();
    let session = Session::read();

    match dispatch_root(&session) {
        RootView::Landing => rsx! { Landing {} },
        RootView::Redirect(path) => {
            nav.replace(path);
            rsx! { div {} }
        }
    }
}

/// Layout wrapper guarding every route nested under it.
///
/// The session is read fresh on each navigation; storage can change behind
/// our back (a login or logout in another window), so nothing is cached.
#[component]
pub fn Protected() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let session = Session::read();

    match authorize(&session, &route.required_role()) {
        Access::Allow => rsx! {
            PageLayout { title: route.title(), role: session.role,
                Outlet::<Route> {}
            }
        },
        Access::Redirect(path) => {
            nav.replace(path);
            rsx! { div {} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::guard::paths;

    #[test]
    fn paths_map_to_route_variants() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Root {});
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!("/signup".parse::<Route>().unwrap(), Route::Signup {});
        assert_eq!("/dashboard".parse::<Route>().unwrap(), Route::Dashboard {});
        assert_eq!("/add-event".parse::<Route>().unwrap(), Route::AddEvent {});
        assert_eq!("/my-events".parse::<Route>().unwrap(), Route::MyEvents {});
        assert_eq!(
            "/trainer-allocation".parse::<Route>().unwrap(),
            Route::TrainerAllocation {}
        );
        assert_eq!(
            "/change-password".parse::<Route>().unwrap(),
            Route::ChangePassword {}
        );
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), paths::DASHBOARD);
        assert_eq!(Route::Events {}.to_string(), paths::EVENTS);
        assert_eq!(Route::Login {}.to_string(), paths::LOGIN);
        assert_eq!(Route::EventRegistration {}.to_string(), "/event-registration");
    }

    #[test]
    fn unknown_path_is_terminal_not_found() {
        let route = "/no-such-page".parse::<Route>().unwrap();
        assert!(matches!(route, Route::PageNotFound { .. }));
    }

    #[test]
    fn role_constraints_match_the_route_surface() {
        // Faculty/admin sections.
        for route in [
            Route::AddEvent {},
            Route::EventRegistration {},
            Route::Analytics {},
        ] {
            let required = route.required_role();
            assert!(required.permits(Some(Role::Faculty)), "{route}");
            assert!(required.permits(Some(Role::Admin)), "{route}");
            assert!(!required.permits(Some(Role::Student)), "{route}");
        }

        // Student-only section.
        let my_events = Route::MyEvents {}.required_role();
        assert!(my_events.permits(Some(Role::Student)));
        assert!(!my_events.permits(Some(Role::Faculty)));
        assert!(!my_events.permits(Some(Role::Admin)));

        // Any authenticated role.
        for route in [
            Route::Dashboard {},
            Route::Events {},
            Route::Attendance {},
            Route::TrainerAllocation {},
            Route::Notifications {},
            Route::Feedback {},
            Route::Profile {},
            Route::ChangePassword {},
        ] {
            assert_eq!(route.required_role(), RequiredRole::Any, "{route}");
        }
    }

    #[test]
    fn titles_cover_every_protected_section() {
        for route in [
            Route::Dashboard {},
            Route::Events {},
            Route::AddEvent {},
            Route::MyEvents {},
            Route::EventRegistration {},
            Route::Attendance {},
            Route::TrainerAllocation {},
            Route::Notifications {},
            Route::Feedback {},
            Route::Analytics {},
            Route::Profile {},
            Route::ChangePassword {},
        ] {
            assert!(!route.title().is_empty(), "{route}");
        }
    }
}
