use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::enums::Role;

/// Authenticated identity attached to a request.
///
/// Produced by whatever authenticates the caller (a signed session cookie,
/// the local mock login) and consumed by the action layer. Only `user_id` is
/// guaranteed; profile fields depend on the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    #[must_use]
    pub fn for_user_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            email: None,
            role: None,
        }
    }
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            role: Some(user.role),
        }
    }
}
