//! Mock sign-in for the local store.
//!
//! Signing in picks the fixed demo account for a role; there are no
//! credentials. The signed-in user is persisted so it survives a restart.

use desk_core::entities::User;
use desk_core::enums::Role;
use desk_core::identity::Session;

use crate::demo::mock_user;
use crate::error::StoreError;
use crate::storage::{AUTH_USER_KEY, KeyValueStorage};

pub struct AuthStore<S: KeyValueStorage> {
    storage: S,
    user: Option<User>,
}

impl<S: KeyValueStorage> AuthStore<S> {
    /// Restore the previously signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored user does not decode.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let user = match storage.get(AUTH_USER_KEY)? {
            Some(blob) => Some(serde_json::from_str(&blob).map_err(|source| {
                StoreError::Corrupt {
                    key: AUTH_USER_KEY.to_string(),
                    source,
                }
            })?),
            None => None,
        };
        Ok(Self { storage, user })
    }

    /// Sign in as the demo account for `role`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be persisted.
    pub fn login(&mut self, role: Role) -> Result<&User, StoreError> {
        let user = mock_user(role);
        self.storage
            .set(AUTH_USER_KEY, &serde_json::to_string(&user)?)?;
        tracing::info!(user_id = %user.id, role = %role, "signed in");
        Ok(&*self.user.insert(user))
    }

    /// # Errors
    ///
    /// Returns an error if the stored user cannot be removed.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.storage.remove(AUTH_USER_KEY)?;
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        Ok(())
    }

    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.user.as_ref().map(Session::from)
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
