use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A comment on a ticket, authored by one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub ticket_id: String,
    pub content: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Input for a new comment; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub ticket_id: String,
    pub content: String,
    pub created_by: String,
}

impl NewComment {
    #[must_use]
    pub fn new(
        ticket_id: impl Into<String>,
        content: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            content: content.into(),
            created_by: created_by.into(),
        }
    }
}
