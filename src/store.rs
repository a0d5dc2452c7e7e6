//! Authentication State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Views only read
//! from it; the helpers below are called right after the Session Store has
//! written (or cleared) device storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::guard::GuardState;
use crate::models::{Session, UserProfile};

#[derive(Clone, Debug, Default, Store)]
pub struct AuthState {
    /// Restored or freshly authenticated session
    pub session: Option<Session>,
    /// Access guard state, re-evaluated on every session change
    pub guard: GuardState,
}

pub type AuthStore = Store<AuthState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the session and re-evaluate the guard
pub fn store_set_session(store: &AuthStore, session: Option<Session>) {
    *store.guard().write() = GuardState::from_session(session.as_ref());
    *store.session().write() = session;
}

/// Signed-in user, tracked
pub fn store_current_user(store: &AuthStore) -> Option<UserProfile> {
    store.session().with(|s| s.as_ref().map(|s| s.user.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> Session {
        Session {
            token: "t1".to_string(),
            user: UserProfile {
                id: Some(1),
                email: "a@b.com".to_string(),
                full_name: name.to_string(),
                role: "USER".to_string(),
            },
        }
    }

    #[test]
    fn test_guard_starts_loading() {
        let owner = Owner::new();
        owner.with(|| {
            let store: AuthStore = Store::new(AuthState::default());
            assert_eq!(store.guard().get_untracked(), GuardState::Loading);
            assert_eq!(store.session().get_untracked(), None);
        });
    }

    #[test]
    fn test_login_then_logout_flips_guard() {
        let owner = Owner::new();
        owner.with(|| {
            let store: AuthStore = Store::new(AuthState::default());

            store_set_session(&store, Some(session("Alice")));
            assert_eq!(store.guard().get_untracked(), GuardState::Authenticated);
            assert_eq!(store.session().get_untracked(), Some(session("Alice")));
            assert_eq!(store_current_user(&store).map(|u| u.full_name).as_deref(), Some("Alice"));

            store_set_session(&store, None);
            assert_eq!(store.guard().get_untracked(), GuardState::Unauthenticated);
            assert_eq!(store.session().get_untracked(), None);
            assert_eq!(store_current_user(&store), None);
        });
    }

    #[test]
    fn test_new_login_replaces_session() {
        let owner = Owner::new();
        owner.with(|| {
            let store: AuthStore = Store::new(AuthState::default());
            store_set_session(&store, Some(session("Alice")));
            store_set_session(&store, Some(session("Bob")));

            assert_eq!(store.guard().get_untracked(), GuardState::Authenticated);
            assert_eq!(store_current_user(&store).map(|u| u.full_name).as_deref(), Some("Bob"));
        });
    }
}
