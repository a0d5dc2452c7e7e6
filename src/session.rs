//! Session Store
//!
//! Sole writer of the persisted session (`token` + `user` keys). Logout is a
//! purely local discard; no server call is made.

use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Session, UserProfile};
use crate::services::{self, AuthResponse, LoginArgs, RegisterArgs};
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(api: ApiClient, storage: Rc<dyn KeyValueStore>) -> Self {
        Self { api, storage }
    }

    /// Authenticate and persist the session. On failure nothing is written,
    /// so any earlier session stays as it was.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let response = services::login(&self.api, &LoginArgs { email, password })
            .await
            .map_err(|e| auth_failure(e, "Login failed"))?;
        let session = session_from(response, email);
        self.persist(&session)?;
        log::info!("signed in as {}", session.user.email);
        Ok(session)
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> ClientResult<Session> {
        let args = RegisterArgs { email, password, full_name };
        let response = services::register(&self.api, &args)
            .await
            .map_err(|e| auth_failure(e, "Registration failed"))?;
        let session = session_from(response, email);
        self.persist(&session)?;
        log::info!("registered {}", session.user.email);
        Ok(session)
    }

    /// Always succeeds, whether or not a session existed
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        log::info!("signed out");
    }

    /// Session restored from device storage, without touching the network
    pub fn current_session(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<UserProfile>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                log::warn!("ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Write both keys or neither: on any write failure the previous values
    /// are put back, so an earlier session survives intact.
    fn persist(&self, session: &Session) -> ClientResult<()> {
        let user = serde_json::to_string(&session.user)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        let previous = [
            (TOKEN_KEY, self.storage.get(TOKEN_KEY)),
            (USER_KEY, self.storage.get(USER_KEY)),
        ];

        let written = self
            .storage
            .set(TOKEN_KEY, &session.token)
            .and_then(|_| self.storage.set(USER_KEY, &user));
        if let Err(e) = written {
            log::warn!("could not persist session: {}", e);
            self.restore(&previous);
            return Err(e);
        }
        Ok(())
    }

    fn restore(&self, previous: &[(&str, Option<String>)]) {
        for (key, value) in previous {
            match value {
                Some(value) => {
                    if let Err(e) = self.storage.set(key, value) {
                        log::error!("could not restore {}: {}", key, e);
                    }
                }
                None => self.storage.remove(key),
            }
        }
    }
}

fn auth_failure(error: ClientError, fallback: &str) -> ClientError {
    log::warn!("{}: {}", fallback, error);
    ClientError::Auth {
        message: Some(error.user_message(fallback)),
    }
}

fn session_from(response: AuthResponse, typed_email: &str) -> Session {
    let email = if response.email.is_empty() {
        typed_email.to_string()
    } else {
        response.email
    };
    Session {
        token: response.token,
        user: UserProfile {
            id: response.id,
            email,
            full_name: response.full_name,
            role: response.role,
        },
    }
}
