//! Admin session state machine over a [`SessionStore`].
//!
//! Two states, `Unauthenticated` and `Authenticated`, with the stored flag as
//! the single source of truth. The flag carries no expiry and is never
//! validated by a server: a stale `"true"` remains authenticated until an
//! explicit logout clears it.

use thiserror::Error;

use crate::SessionStore;

/// localStorage key holding the admin session flag.
pub const SESSION_KEY: &str = "adminAuthenticated";

/// Fixed demo admin credentials, checked with exact, case-sensitive equality.
pub const ADMIN_EMAIL: &str = "admin@aidirectory.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Admin session flow bound to a concrete store.
#[derive(Clone, Debug)]
pub struct AdminSession<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> AdminSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current state, derived from the stored flag. Anything other than the
    /// exact string `"true"` means unauthenticated.
    pub fn status(&self) -> SessionStatus {
        match self.store.get(SESSION_KEY).as_deref() {
            Some("true") => SessionStatus::Authenticated,
            _ => SessionStatus::Unauthenticated,
        }
    }

    /// Attempt the Unauthenticated → Authenticated transition.
    ///
    /// Mismatches leave the stored state untouched; there is no lockout or
    /// attempt counter, so callers may retry indefinitely.
    pub fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            self.store.set(SESSION_KEY, "true");
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }

    /// Authenticated → Unauthenticated: clear the flag.
    pub fn logout(&self) {
        self.store.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn session() -> AdminSession<MemoryStore> {
        AdminSession::new(MemoryStore::new())
    }

    #[test]
    fn initial_state_is_unauthenticated() {
        assert_eq!(session().status(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn exact_credentials_authenticate_and_persist_flag() {
        let store = MemoryStore::new();
        let session = AdminSession::new(store.clone());

        session.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();

        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(store.get(SESSION_KEY), Some("true".to_string()));
    }

    #[test]
    fn wrong_credentials_stay_unauthenticated() {
        let session = session();

        let attempts = [
            ("admin@aidirectory.com", "wrong"),
            ("someone@else.com", "admin123"),
            ("Admin@aidirectory.com", "admin123"), // case matters
            ("admin@aidirectory.com", "ADMIN123"),
            ("", ""),
        ];
        for (email, password) in attempts {
            assert_eq!(
                session.login(email, password),
                Err(LoginError::InvalidCredentials)
            );
            assert_eq!(session.status(), SessionStatus::Unauthenticated);
        }
    }

    #[test]
    fn error_display_matches_ui_string() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn retry_after_failure_still_allowed() {
        let session = session();
        for _ in 0..50 {
            let _ = session.login(ADMIN_EMAIL, "nope");
        }
        session.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert_eq!(session.status(), SessionStatus::Authenticated);
    }

    #[test]
    fn logout_clears_flag() {
        let store = MemoryStore::new();
        let session = AdminSession::new(store.clone());

        session.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        session.logout();

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert_eq!(store.get(SESSION_KEY), None);
    }

    #[test]
    fn stale_flag_remains_valid() {
        // No expiry: a flag written by an earlier visit still authenticates.
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "true");

        let session = AdminSession::new(store);
        assert_eq!(session.status(), SessionStatus::Authenticated);
    }

    #[test]
    fn garbage_flag_value_is_not_authenticated() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "True");

        let session = AdminSession::new(store);
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
    }
}
