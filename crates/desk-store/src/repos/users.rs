//! User operations and the profile view.

use desk_core::entities::{Group, Ticket, User, avatar_url};
use desk_core::enums::Role;
use desk_core::ids::PREFIX_USER;
use serde::Serialize;

use super::fresh_id;
use crate::error::StoreError;
use crate::storage::{Collection, KeyValueStorage};
use crate::store::DeskStore;

/// A user with the tickets assigned to them and the groups they belong to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user: User,
    pub assigned_tickets: Vec<Ticket>,
    pub groups: Vec<Group>,
}

impl<S: KeyValueStorage> DeskStore<S> {
    /// Append a new account. The avatar is derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if id generation or the storage write fails.
    pub fn invite_user(&mut self, email: &str, role: Role, name: &str) -> Result<User, StoreError> {
        let id = fresh_id(PREFIX_USER, self.users.iter().map(|u| u.id.as_str()))?;
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: avatar_url(name),
        };
        let mut users = self.users.clone();
        users.push(user.clone());
        self.commit(Collection::Users, users, |s| &mut s.users)?;
        tracing::info!(user_id = %user.id, role = %role, "invited user");
        Ok(user)
    }

    #[must_use]
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Users eligible for assignment and group membership.
    #[must_use]
    pub fn staff_users(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.role.is_staff()).collect()
    }

    #[must_use]
    pub fn profile(&self, user_id: &str) -> Option<UserProfile> {
        let user = self.get_user(user_id)?.clone();
        Some(UserProfile {
            user,
            assigned_tickets: self
                .tickets_assigned_to(user_id)
                .into_iter()
                .cloned()
                .collect(),
            groups: self
                .groups_for_user(user_id)
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}
