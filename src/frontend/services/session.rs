//! Session state derived from persistent storage.
//!
//! The login flow writes three independent keys; they are read independently
//! and can disagree (e.g. a token left behind with `isLoggedIn` unset). The
//! guard treats token presence as primary; the stricter [`Session::is_logged_in`]
//! conjunction is only used for root dispatch.

use crate::frontend::services::storage::Storage;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER_ROLE: &str = "userRole";
pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";

/// Identity role of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "faculty" => Some(Self::Faculty),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }
}

/// Authenticated-identity state for the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub logged_in: bool,
    pub role: Option<Role>,
}

impl Session {
    /// Derives a session from a loaded store. Absent keys yield logged-out
    /// defaults; an unrecognized role reads as no role.
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            token: storage.get(KEY_TOKEN).map(str::to_string),
            logged_in: storage.get(KEY_IS_LOGGED_IN) == Some("true"),
            role: storage.get(KEY_USER_ROLE).and_then(Role::parse),
        }
    }

    /// Loads the store and derives the current session. Called on every
    /// navigation rather than cached: storage can be mutated behind our back
    /// by a login or logout elsewhere.
    pub fn read() -> Self {
        Self::from_storage(&Storage::load())
    }

    /// True only when all three storage fields agree on an authenticated
    /// user. Root dispatch uses this; the access guard keys off the token
    /// alone.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.role.is_some() && self.logged_in
    }
}

/// Writes the session keys for a fresh login.
pub fn store_login(storage: &mut Storage, token: &str, role: Role) {
    storage.set(KEY_TOKEN, token);
    storage.set(KEY_USER_ROLE, role.as_str());
    storage.set(KEY_IS_LOGGED_IN, "true");
}

/// Clears the session keys on logout.
pub fn clear_login(storage: &mut Storage) {
    storage.remove(KEY_TOKEN);
    storage.remove(KEY_USER_ROLE);
    storage.remove(KEY_IS_LOGGED_IN);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_reads_as_logged_out() {
        let session = Session::from_storage(&Storage::default());
        assert_eq!(session.token, None);
        assert_eq!(session.role, None);
        assert!(!session.logged_in);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn logged_in_flag_accepts_only_exact_literal() {
        for value in ["TRUE", "True", "1", "yes", ""] {
            let mut storage = Storage::default();
            storage.set(KEY_IS_LOGGED_IN, value);
            assert!(!Session::from_storage(&storage).logged_in, "{value:?}");
        }

        let mut storage = Storage::default();
        storage.set(KEY_IS_LOGGED_IN, "true");
        assert!(Session::from_storage(&storage).logged_in);
    }

    #[test]
    fn unrecognized_role_reads_as_none() {
        let mut storage = Storage::default();
        storage.set(KEY_USER_ROLE, "trainer");
        assert_eq!(Session::from_storage(&storage).role, None);
    }

    #[test]
    fn token_without_flag_is_not_logged_in() {
        let mut storage = Storage::default();
        storage.set(KEY_TOKEN, "tok-1");
        storage.set(KEY_USER_ROLE, "student");
        let session = Session::from_storage(&storage);
        assert!(session.token.is_some());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut storage = Storage::default();
        store_login(&mut storage, "tok-2", Role::Faculty);

        let session = Session::from_storage(&storage);
        assert!(session.is_logged_in());
        assert_eq!(session.role, Some(Role::Faculty));

        clear_login(&mut storage);
        assert_eq!(Session::from_storage(&storage), Session::default());
    }
}
