//! Session persistence: hydrate at startup, write through on login, purge on logout.
//!
//! DESIGN
//! ======
//! The in-memory [`Session`] is owned by the caller; this store only keeps the
//! durable mirror in step with it. Each operation finishes its writes before
//! returning, so a later read never sees half a record.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::{PersistedStateError, StorageError};
use crate::storage::{Storage, TOKEN_KEY, USER_KEY};
use crate::types::{AuthPayload, Session, User};

/// Write-through persistence for the current session.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Rebuild the session from durable storage.
    ///
    /// Any incomplete or malformed record is purged and the empty session
    /// returned; this never fails.
    pub fn hydrate(&mut self) -> Session {
        match self.read_persisted() {
            Ok(session) => {
                tracing::debug!(user_id = session.user().map(|u| u.id.as_str()), "session restored");
                session
            }
            Err(reason) => {
                if self.storage.get_item(USER_KEY).is_some() || self.storage.get_item(TOKEN_KEY).is_some() {
                    tracing::warn!(%reason, "discarding persisted session");
                } else {
                    tracing::debug!("no persisted session");
                }
                self.purge_best_effort();
                Session::empty()
            }
        }
    }

    /// Enter the authenticated state and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either entry could not be written; whatever
    /// was written is purged first so no partial record remains. An empty
    /// token is refused up front, since [`SessionStore::hydrate`] would read it
    /// back as absent.
    pub fn login(&mut self, payload: AuthPayload) -> Result<Session, StorageError> {
        if payload.token.is_empty() {
            return Err(StorageError::new("set", TOKEN_KEY, "refusing to persist an empty token"));
        }
        let user_json =
            serde_json::to_string(&payload.user).map_err(|e| StorageError::new("serialize", USER_KEY, e.to_string()))?;

        let written = self
            .storage
            .set_item(USER_KEY, &user_json)
            .and_then(|()| self.storage.set_item(TOKEN_KEY, &payload.token));
        if let Err(e) = written {
            tracing::error!(error = %e, "session write failed");
            self.purge_best_effort();
            return Err(e);
        }

        tracing::debug!(user_id = %payload.user.id, "session persisted");
        Ok(Session::from(payload))
    }

    /// Leave the authenticated state and purge the durable record.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] if either entry could not be removed.
    /// Both removals are attempted regardless.
    pub fn logout(&mut self) -> Result<Session, StorageError> {
        let user = self.storage.remove_item(USER_KEY);
        let token = self.storage.remove_item(TOKEN_KEY);
        user.and(token)?;
        tracing::debug!("session cleared");
        Ok(Session::empty())
    }

    fn read_persisted(&self) -> Result<Session, PersistedStateError> {
        let raw_user = present(self.storage.get_item(USER_KEY)).ok_or(PersistedStateError::MissingUser)?;
        let token = present(self.storage.get_item(TOKEN_KEY)).ok_or(PersistedStateError::MissingToken)?;
        let user: User =
            serde_json::from_str(&raw_user).map_err(|e| PersistedStateError::MalformedUser(e.to_string()))?;
        Ok(Session::authenticated(user, token))
    }

    fn purge_best_effort(&mut self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                tracing::warn!(error = %e, "failed to purge persisted session entry");
            }
        }
    }
}

/// Empty strings count as absent, matching how the browser client treats them.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
