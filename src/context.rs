//! Application Context
//!
//! Explicit context object provided via the Leptos Context API: the gateway
//! client, the Session Store (single writer of the session) and the reactive
//! auth state every view reads from.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, ReqwestTransport};
use crate::config::AppConfig;
use crate::error::ClientResult;
use crate::models::{Session, UserProfile};
use crate::session::SessionStore;
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage};
use crate::store::{store_current_user, store_set_session, AuthState, AuthStore};

/// Non-reactive services shared by all views
pub struct Services {
    pub api: ApiClient,
    pub sessions: SessionStore,
}

impl Services {
    pub fn new(config: &AppConfig) -> Self {
        let storage: Rc<dyn KeyValueStore> = if BrowserStorage::is_available() {
            Rc::new(BrowserStorage)
        } else {
            log::warn!("localStorage unavailable, session will not survive a reload");
            Rc::new(MemoryStorage::new())
        };
        let api = ApiClient::new(
            config.api_base_url.clone(),
            Rc::new(ReqwestTransport::new()),
            storage.clone(),
        );
        let sessions = SessionStore::new(api.clone(), storage);
        Self { api, sessions }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
    /// Reactive session + guard state - read
    pub auth: AuthStore,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            services: StoredValue::new_local(services),
            auth: Store::new(AuthState::default()),
        }
    }

    /// Gateway client for service calls
    pub fn api(&self) -> ApiClient {
        self.services.with_value(|s| s.api.clone())
    }

    fn sessions(&self) -> SessionStore {
        self.services.with_value(|s| s.sessions.clone())
    }

    /// Read the persisted session once at startup (no network call)
    pub fn restore_session(&self) {
        let session = self.sessions().current_session();
        log::debug!("session restored: {}", session.is_some());
        store_set_session(&self.auth, session);
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let session = self.sessions().login(email, password).await?;
        store_set_session(&self.auth, Some(session.clone()));
        Ok(session)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> ClientResult<Session> {
        let session = self.sessions().register(email, password, full_name).await?;
        store_set_session(&self.auth, Some(session.clone()));
        Ok(session)
    }

    pub fn logout(&self) {
        self.sessions().logout();
        store_set_session(&self.auth, None);
    }

    /// Signed-in user, tracked
    pub fn current_user(&self) -> Option<UserProfile> {
        store_current_user(&self.auth)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::Method;
    use crate::guard::GuardState;
    use crate::store::AuthStateStoreFields;
    use futures::executor::block_on;

    fn context(transport: Rc<MockTransport>, storage: Rc<MemoryStorage>) -> AppContext {
        let api = ApiClient::new("http://api.test", transport, storage.clone());
        let sessions = SessionStore::new(api.clone(), storage);
        AppContext::new(Services { api, sessions })
    }

    fn alice_transport() -> Rc<MockTransport> {
        let transport = Rc::new(MockTransport::new());
        transport.respond(Method::Post, "/auth/login", 200, r#"{"token":"t1","fullName":"Alice"}"#);
        transport
    }

    #[test]
    fn test_login_flips_guard_to_authenticated() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = alice_transport();
            let ctx = context(transport, Rc::new(MemoryStorage::new()));

            ctx.restore_session();
            assert_eq!(ctx.auth.guard().get_untracked(), GuardState::Unauthenticated);

            block_on(ctx.login("a@b.com", "secret")).unwrap();
            assert_eq!(ctx.auth.guard().get_untracked(), GuardState::Authenticated);
            let user = untrack(|| ctx.current_user());
            assert_eq!(user.map(|u| u.full_name).as_deref(), Some("Alice"));
        });
    }

    #[test]
    fn test_failed_login_leaves_guard_untouched() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = Rc::new(MockTransport::new());
            transport.respond(Method::Post, "/auth/login", 401, r#"{"error":"Bad credentials"}"#);
            let ctx = context(transport, Rc::new(MemoryStorage::new()));
            ctx.restore_session();

            assert!(block_on(ctx.login("a@b.com", "wrong")).is_err());
            assert_eq!(ctx.auth.guard().get_untracked(), GuardState::Unauthenticated);
            assert_eq!(ctx.auth.session().get_untracked(), None);
        });
    }

    #[test]
    fn test_logout_clears_store_and_storage() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = alice_transport();
            let storage = Rc::new(MemoryStorage::new());
            let ctx = context(transport, storage.clone());
            block_on(ctx.login("a@b.com", "secret")).unwrap();

            ctx.logout();
            assert_eq!(ctx.auth.guard().get_untracked(), GuardState::Unauthenticated);
            assert_eq!(ctx.auth.session().get_untracked(), None);
            assert_eq!(storage.get(crate::storage::TOKEN_KEY), None);
        });
    }

    #[test]
    fn test_restore_reads_persisted_session() {
        let owner = Owner::new();
        owner.with(|| {
            let transport = alice_transport();
            let storage = Rc::new(MemoryStorage::new());
            let first = context(transport.clone(), storage.clone());
            block_on(first.login("a@b.com", "secret")).unwrap();

            let reloaded = context(transport, storage);
            assert_eq!(reloaded.auth.guard().get_untracked(), GuardState::Loading);
            reloaded.restore_session();
            assert_eq!(reloaded.auth.guard().get_untracked(), GuardState::Authenticated);
        });
    }
}
