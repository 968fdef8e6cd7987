//! Session state machine
//!
//! Two states: Anonymous and Authenticated. The store restores a persisted
//! session at construction, so a reload lands back in Authenticated without
//! a network round-trip. Logout clears only the session record; the user's
//! history and favorites partitions stay on disk and reappear on the next
//! login with the same id.

use crate::session::user::{Credential, User, demo_credentials};
use crate::storage::{SESSION_KEY, Storage};
use std::sync::Arc;
use tracing::{info, warn};

/// Error type for login attempts. Wrong credentials are a normal outcome,
/// surfaced as a value; nothing in here panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidCredentials,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidCredentials => {
                write!(f, "Invalid credentials or wrong role selected")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Holds the identity of the current user, or the absence of one.
///
/// Exactly one identity is active per store; there is no concurrent-session
/// model. Which `HistoryLedger`/`FavoritesSet` partition is visible is gated
/// by `current_user`.
pub struct SessionStore {
    store: Arc<dyn Storage>,
    credentials: Vec<Credential>,
    current: Option<User>,
}

impl SessionStore {
    /// Create a store backed by the built-in demo accounts, restoring any
    /// persisted session.
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self::with_credentials(store, demo_credentials())
    }

    /// Create a store with an explicit credential list (used by tests and
    /// by deployments that provision their own local accounts).
    pub fn with_credentials(store: Arc<dyn Storage>, credentials: Vec<Credential>) -> Self {
        let current = restore_session(store.as_ref());
        SessionStore {
            store,
            credentials,
            current,
        }
    }

    /// The active user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Anonymous → Authenticated via the local credential list.
    ///
    /// The role must match the stored account as well; picking the wrong
    /// role on the login form is the same failure as a wrong password.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        role: crate::session::UserRole,
    ) -> Result<User, SessionError> {
        let matched = self
            .credentials
            .iter()
            .find(|c| {
                c.user.username == username && c.password == password && c.user.role == role
            })
            .map(|c| c.user.clone());

        match matched {
            Some(user) => {
                self.complete_login(user.clone());
                Ok(user)
            }
            None => Err(SessionError::InvalidCredentials),
        }
    }

    /// Anonymous → Authenticated with an externally verified user (remote
    /// login/registration success). Also persists the session record.
    pub fn complete_login(&mut self, user: User) {
        info!(username = %user.username, role = %user.role, "session opened");
        match serde_json::to_string(&user) {
            Ok(json) => self.store.set(SESSION_KEY, &json),
            Err(e) => warn!("Failed to persist session: {}", e),
        }
        self.current = Some(user);
    }

    /// Authenticated → Anonymous. Returns the user that was logged out.
    /// Persisted history/favorites partitions are left untouched.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.current.take();
        if let Some(user) = &user {
            info!(username = %user.username, "session closed");
        }
        self.store.remove(SESSION_KEY);
        user
    }
}

/// Read the persisted session record, failing soft to Anonymous on a
/// missing or malformed value.
fn restore_session(store: &dyn Storage) -> Option<User> {
    let raw = store.get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Discarding malformed session record: {}", e);
            store.remove(SESSION_KEY);
            None
        }
    }
}
