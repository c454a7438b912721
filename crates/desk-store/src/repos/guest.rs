//! Ticket submission from the public, account-less form.

use desk_core::entities::{GUEST_CREATOR, NewTicket, Ticket};
use desk_core::enums::{ProblemType, TicketPriority, TicketStatus};
use desk_core::errors::CoreError;
use serde::Deserialize;

use crate::error::StoreError;
use crate::storage::KeyValueStorage;
use crate::store::DeskStore;

/// What a guest fills in on the public form.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestTicketRequest {
    pub name: String,
    pub room: String,
    pub problem_type: ProblemType,
    pub description: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl GuestTicketRequest {
    fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("room", &self.room),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }

    fn into_new_ticket(self) -> NewTicket {
        let email = self.email.filter(|e| !e.trim().is_empty());
        NewTicket {
            title: format!("{} Issue - Room {}", self.problem_type, self.room),
            description: self.description,
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            created_by: GUEST_CREATOR.to_string(),
            assigned_to: None,
            assigned_group_id: None,
            is_guest: true,
            guest_name: Some(self.name),
            guest_email: email,
            guest_room: Some(self.room),
            problem_type: Some(self.problem_type),
        }
    }
}

impl<S: KeyValueStorage> DeskStore<S> {
    /// Record a guest report as a `MEDIUM` priority open ticket.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if name, room, or description is blank;
    /// otherwise as [`DeskStore::create_ticket`].
    pub fn submit_guest_ticket(&mut self, request: GuestTicketRequest) -> Result<Ticket, StoreError> {
        request.validate()?;
        self.create_ticket(request.into_new_ticket())
    }
}
