//! Client session state.
//!
//! [`SessionStore`] is the single owner of "who is logged in". It mirrors the
//! bearer token and user profile into a [`KeyValueStore`] under fixed keys so a
//! reload can [`SessionStore::restore`] the session. Authorization flags are
//! derived from the session on every read and never stored.

pub mod storage;

use dioxus_logger::tracing;

use crate::{
    error::storage::StorageError,
    model::user::UserDto,
    session::storage::KeyValueStore,
};

pub use storage::MemoryStorage;

#[cfg(feature = "web")]
pub use storage::BrowserStorage;

/// Storage key of the opaque bearer token.
pub const SESSION_TOKEN_KEY: &str = "paws:auth:token";

/// Storage key of the JSON-serialized [`UserDto`].
pub const SESSION_USER_KEY: &str = "paws:auth:user";

/// An authenticated user and the token the API issued for them.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserDto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationFlags {
    pub is_logged_in: bool,
    pub is_admin: bool,
}

pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Rebuild the session from `storage` at startup.
    ///
    /// Anything other than a non-empty token next to a parseable user profile
    /// yields a logged-out store. Leftover halves of a session are removed on a
    /// best-effort basis.
    pub fn restore(storage: S) -> Self {
        let mut store = Self {
            storage,
            session: None,
        };

        let token = store.read_key(SESSION_TOKEN_KEY);
        let user = store.read_key(SESSION_USER_KEY);

        match (token, user) {
            (None, None) => {}
            (Some(token), Some(raw_user)) if !token.is_empty() => {
                match serde_json::from_str::<UserDto>(&raw_user) {
                    Ok(user) => {
                        tracing::debug!(user_id = %user.id, "Restored session");

                        store.session = Some(Session { token, user });
                    }
                    Err(e) => {
                        tracing::warn!("Discarding persisted session with malformed user: {}", e);

                        store.discard_persisted();
                    }
                }
            }
            _ => {
                tracing::warn!("Discarding incomplete persisted session");

                store.discard_persisted();
            }
        }

        store
    }

    /// Start a session, persisting it before it becomes visible.
    ///
    /// If persisting fails the previous in-memory session is kept and the
    /// token key is put back to what it held before, so storage still matches
    /// memory.
    pub fn login(&mut self, token: String, user: UserDto) -> Result<(), StorageError> {
        let raw_user =
            serde_json::to_string(&user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        let previous_token = self.storage.get(SESSION_TOKEN_KEY)?;

        self.storage.set(SESSION_TOKEN_KEY, &token)?;
        if let Err(e) = self.storage.set(SESSION_USER_KEY, &raw_user) {
            self.rollback_token(previous_token.as_deref());

            return Err(e);
        }

        tracing::info!(user_id = %user.id, "User logged in");

        self.session = Some(Session { token, user });

        Ok(())
    }

    /// End the session.
    ///
    /// The in-memory session is always cleared; a storage error is still
    /// returned so the caller can report that the logout may not survive a
    /// reload.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(session) = self.session.take() {
            tracing::info!(user_id = %session.user.id, "User logged out");
        }

        let token_result = self.storage.remove(SESSION_TOKEN_KEY);
        let user_result = self.storage.remove(SESSION_USER_KEY);

        token_result.and(user_result)
    }

    /// End a session the API no longer accepts.
    pub fn invalidate(&mut self) {
        if self.session.is_some() {
            tracing::warn!("Session rejected by the API, logging out");
        }

        if let Err(e) = self.logout() {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    pub fn user(&self) -> Option<&UserDto> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn flags(&self) -> AuthorizationFlags {
        AuthorizationFlags {
            is_logged_in: self.session.is_some(),
            is_admin: self
                .session
                .as_ref()
                .is_some_and(|session| session.user.is_admin),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.flags().is_logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.flags().is_admin
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {} from storage: {}", key, e);
                None
            }
        }
    }

    fn rollback_token(&mut self, previous: Option<&str>) {
        let result = match previous {
            Some(previous) => self.storage.set(SESSION_TOKEN_KEY, previous),
            None => self.storage.remove(SESSION_TOKEN_KEY),
        };

        if let Err(e) = result {
            tracing::warn!("Failed to roll back persisted token: {}", e);
        }
    }

    fn discard_persisted(&mut self) {
        for key in [SESSION_TOKEN_KEY, SESSION_USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::debug!("Failed to remove {} from storage: {}", key, e);
            }
        }
    }
}
