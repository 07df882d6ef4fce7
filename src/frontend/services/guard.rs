//! Access guard and root dispatch.

use crate::frontend::services::session::{Role, Session};

/// Well-known redirect targets.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const EVENTS: &str = "/events";
}

/// Role constraint attached to a route, fixed at the route-table boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    /// Any authenticated session, regardless of role.
    Any,
    One(Role),
    AnyOf(&'static [Role]),
}

impl RequiredRole {
    pub fn permits(&self, role: Option<Role>) -> bool {
        match self {
            Self::Any => true,
            Self::One(required) => role == Some(*required),
            Self::AnyOf(set) => role.is_some_and(|r| set.contains(&r)),
        }
    }
}

/// Outcome of a protection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Decides whether a session may see a protected route.
///
/// Token presence takes precedence: a missing token always redirects to the
/// login page, a role mismatch to the generic dashboard. The user is never
/// told why access was denied, and is never sent back to the attempted path.
pub fn authorize(session: &Session, required: &RequiredRole) -> Access {
    if session.token.is_none() {
        return Access::Redirect(paths::LOGIN);
    }
    if required.permits(session.role) {
        Access::Allow
    } else {
        Access::Redirect(paths::DASHBOARD)
    }
}

/// What the root path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootView {
    /// Unauthenticated root is a real page, not a redirect.
    Landing,
    Redirect(&'static str),
}

/// Resolves `/`: visitors see the landing page, authenticated users land on
/// their role's default section.
pub fn dispatch_root(session: &Session) -> RootView {
    if !session.is_logged_in() {
        return RootView::Landing;
    }
    match session.role {
        Some(Role::Student) => RootView::Redirect(paths::EVENTS),
        _ => RootView::Redirect(paths::DASHBOARD),
    }
}
