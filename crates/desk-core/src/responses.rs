//! Response types returned by the action layer and the `desk` CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Comment, Ticket};

/// Uniform outcome of a mutating action.
///
/// Serializes as `{"success": true}` or `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ActionResult {
    Success { success: bool },
    Error { error: String },
}

impl ActionResult {
    #[must_use]
    pub const fn ok() -> Self {
        Self::Success { success: true }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { success: true })
    }

    /// The human-readable failure message, if this is an error.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(error),
            Self::Success { .. } => None,
        }
    }
}

/// Display fields of a related user (creator, assignee, comment author).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A ticket row in the list view with its creator and assignee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketListItem {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub creator: PersonRef,
    pub assignee: Option<PersonRef>,
}

/// A comment together with its author's display fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: PersonRef,
}

/// Full ticket view: related people plus the comment thread, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketDetail {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub creator: PersonRef,
    pub assignee: Option<PersonRef>,
    pub comments: Vec<CommentWithAuthor>,
}

/// Ticket counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketStats {
    pub total: u64,
    pub open: u64,
    pub resolved: u64,
}

/// Dashboard payload: counts plus the most recent tickets, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dashboard<T> {
    pub stats: TicketStats,
    pub recent_tickets: Vec<T>,
}

impl<T> Default for Dashboard<T> {
    fn default() -> Self {
        Self {
            stats: TicketStats::default(),
            recent_tickets: Vec::new(),
        }
    }
}
