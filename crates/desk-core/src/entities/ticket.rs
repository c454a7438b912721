use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProblemType, TicketPriority, TicketStatus};

/// `created_by` value recorded on tickets submitted without an account.
pub const GUEST_CREATOR: &str = "guest";

/// A reported issue or request tracked through its status lifecycle.
///
/// Guest tickets carry free-text submitter identity in the `guest_*` fields
/// and have `created_by == GUEST_CREATOR`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_guest: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<ProblemType>,
}

impl Ticket {
    /// Build a ticket from creation input with the given identity and timestamp.
    ///
    /// `created_at` and `updated_at` are both set to `now`.
    #[must_use]
    pub fn from_new(id: String, new: NewTicket, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            status: new.status,
            priority: new.priority,
            created_by: new.created_by,
            assigned_to: new.assigned_to,
            assigned_group_id: new.assigned_group_id,
            created_at: now,
            updated_at: now,
            is_guest: new.is_guest,
            guest_name: new.guest_name,
            guest_email: new.guest_email,
            guest_room: new.guest_room,
            problem_type: new.problem_type,
        }
    }

    #[must_use]
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(user_id)
    }
}

/// Creation input for a ticket: everything except `id` and the timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_group_id: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub guest_email: Option<String>,
    #[serde(default)]
    pub guest_room: Option<String>,
    #[serde(default)]
    pub problem_type: Option<ProblemType>,
}

impl NewTicket {
    /// An `OPEN`, unassigned, non-guest ticket.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TicketPriority,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TicketStatus::Open,
            priority,
            created_by: created_by.into(),
            assigned_to: None,
            assigned_group_id: None,
            is_guest: false,
            guest_name: None,
            guest_email: None,
            guest_room: None,
            problem_type: None,
        }
    }

    #[must_use]
    pub fn assigned_to(mut self, user_id: impl Into<String>) -> Self {
        self.assigned_to = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn assigned_group(mut self, group_id: impl Into<String>) -> Self {
        self.assigned_group_id = Some(group_id.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(now: DateTime<Utc>) -> Ticket {
        Ticket::from_new(
            "tkt-0001".into(),
            NewTicket::new("Printer jam", "Tray 2", TicketPriority::Low, "u3"),
            now,
        )
    }

    #[test]
    fn from_new_stamps_both_timestamps() {
        let now = Utc::now();
        let ticket = sample(now);
        assert_eq!(ticket.created_at, now);
        assert_eq!(ticket.updated_at, now);
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(sample(Utc::now())).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("createdBy"));
        assert!(obj.contains_key("updatedAt"));
        assert!(!obj.contains_key("assignedTo"));
        assert!(!obj.contains_key("isGuest"));
        assert_eq!(obj["priority"], "LOW");
    }

    #[test]
    fn reads_browser_shaped_blob() {
        let json = r#"{
            "id": "t2",
            "title": "Feature Request: Dark Mode",
            "description": "Please add dark mode support.",
            "status": "IN_PROGRESS",
            "priority": "LOW",
            "createdBy": "u3",
            "assignedTo": "u2",
            "createdAt": "2026-01-01T10:00:00.000Z",
            "updatedAt": "2026-01-02T10:00:00.000Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert!(ticket.is_assigned_to("u2"));
        assert!(!ticket.is_guest);
        assert_eq!(ticket.problem_type, None);
    }
}
