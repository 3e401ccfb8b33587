//! The session context: who is logged in, and the operations that change it.
//!
//! CONCURRENCY
//! ===========
//! Operations are async request/response; the user lock is never held
//! across an await. Overlapping operations resolve through an auth epoch:
//! `login` and `logout` bump it, and a `restore` that completes after the
//! epoch moved discards its result instead of clobbering newer state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Role, User};

/// The two observable session states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated,
}

/// Single source of truth for the authenticated user.
///
/// Owns the in-memory user slot and mediates every mutation of the token
/// store. Share it as `Arc<Session>`; all operations take `&self`.
pub struct Session {
    api: ApiClient,
    user: RwLock<Option<User>>,
    epoch: AtomicU64,
}

impl Session {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            user: RwLock::new(None),
            epoch: AtomicU64::new(0),
        }
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.user.read().map_or(None, |guard| guard.clone())
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.current_user().is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        }
    }

    /// Whether the logged-in user holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.role == Role::Admin)
    }

    /// Authenticate and populate the session.
    ///
    /// On success the returned token is persisted and the user slot set.
    /// On failure the error propagates to the caller and prior session
    /// state is left unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let auth = self.api.login(username, password).await?;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.api.token_store().set(&auth.access_token);
        self.set_user(Some(auth.user.clone()));
        tracing::info!(username = %auth.user.username, "logged in");
        Ok(auth.user)
    }

    /// Create an account. Never mutates session state; the caller must log
    /// in explicitly afterward.
    pub async fn register(&self, email: &str, username: &str, password: &str) -> Result<(), ApiError> {
        self.api.register(email, username, password).await
    }

    /// Clear the stored token and the in-memory user. Synchronous,
    /// idempotent, no backend call.
    pub fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.api.token_store().clear();
        self.set_user(None);
        tracing::info!("logged out");
    }

    /// Restore the session from a previously stored token.
    ///
    /// Intended to run once at startup. No stored token means no network
    /// call. Failures are swallowed: a 401 proves the token dead and purges
    /// it; a transport error clears the user but keeps the token for the
    /// next start.
    pub async fn restore(&self) {
        if self.api.token_store().get().is_none() {
            tracing::debug!("no stored token, skipping restore");
            return;
        }

        let snapshot = self.epoch.load(Ordering::SeqCst);
        let result = self.api.current_user().await;
        if self.epoch.load(Ordering::SeqCst) != snapshot {
            tracing::debug!("session changed while restore was in flight, discarding");
            return;
        }

        match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "session restored");
                self.set_user(Some(user));
            }
            Err(ApiError::Unauthorized) => {
                tracing::info!("stored token rejected, purging it");
                self.api.token_store().clear();
                self.set_user(None);
            }
            Err(error) => {
                tracing::warn!(%error, "session restore failed");
                self.set_user(None);
            }
        }
    }

    /// Handle to the API client, for consumers making non-auth calls.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn set_user(&self, user: Option<User>) {
        if let Ok(mut guard) = self.user.write() {
            *guard = user;
        }
    }
}
