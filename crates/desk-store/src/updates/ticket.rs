//! Ticket update builder.

use desk_core::entities::Ticket;
use desk_core::enums::{TicketPriority, TicketStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<Option<String>>,
    pub assigned_group_id: Option<Option<String>>,
}

impl TicketUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_none()
            && self.assigned_group_id.is_none()
    }

    /// Merge the set fields into `ticket`. Timestamps are the caller's concern.
    pub(crate) fn apply(self, ticket: &mut Ticket) {
        if let Some(title) = self.title {
            ticket.title = title;
        }
        if let Some(description) = self.description {
            ticket.description = description;
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(assigned_to) = self.assigned_to {
            ticket.assigned_to = assigned_to;
        }
        if let Some(assigned_group_id) = self.assigned_group_id {
            ticket.assigned_group_id = assigned_group_id;
        }
    }
}

#[derive(Debug, Default)]
pub struct TicketUpdateBuilder(TicketUpdate);

impl TicketUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TicketUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TicketStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: TicketPriority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, user_id: Option<String>) -> Self {
        self.0.assigned_to = Some(user_id);
        self
    }

    #[must_use]
    pub fn assigned_group(mut self, group_id: Option<String>) -> Self {
        self.0.assigned_group_id = Some(group_id);
        self
    }

    #[must_use]
    pub fn build(self) -> TicketUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use desk_core::entities::NewTicket;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_touches_only_set_fields() {
        let original = Ticket::from_new(
            "tkt-1".into(),
            NewTicket::new("Title", "Body", TicketPriority::Low, "u3").assigned_to("u2"),
            Utc::now(),
        );
        let mut ticket = original.clone();
        TicketUpdateBuilder::new()
            .status(TicketStatus::Resolved)
            .build()
            .apply(&mut ticket);

        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(
            Ticket {
                status: original.status,
                ..ticket
            },
            original
        );
    }

    #[test]
    fn nested_none_clears_assignee() {
        let mut ticket = Ticket::from_new(
            "tkt-1".into(),
            NewTicket::new("Title", "Body", TicketPriority::Low, "u3").assigned_to("u2"),
            Utc::now(),
        );
        TicketUpdateBuilder::new()
            .assigned_to(None)
            .build()
            .apply(&mut ticket);
        assert_eq!(ticket.assigned_to, None);
    }

    #[test]
    fn default_update_is_empty() {
        assert!(TicketUpdate::default().is_empty());
        assert!(!TicketUpdateBuilder::new().title("x").build().is_empty());
    }
}
