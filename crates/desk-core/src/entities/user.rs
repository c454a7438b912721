use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// A helpdesk account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Avatar image URL.
    pub avatar: String,
}

/// Generated avatar URL seeded by the user's display name.
#[must_use]
pub fn avatar_url(name: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={}", urlencoding::encode(name))
}
