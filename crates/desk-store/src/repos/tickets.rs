//! Ticket operations: create, partial update, assignment, and lookups.

use chrono::Utc;
use desk_core::entities::{NewTicket, Ticket};
use desk_core::enums::{TicketPriority, TicketStatus};
use desk_core::ids::PREFIX_TICKET;

use super::fresh_id;
use crate::error::StoreError;
use crate::notify::GroupNotice;
use crate::storage::{Collection, KeyValueStorage};
use crate::store::DeskStore;
use crate::updates::ticket::{TicketUpdate, TicketUpdateBuilder};

/// Ticket list filter. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<String>,
    pub assigned_group_id: Option<String>,
    pub created_by: Option<String>,
    /// Case-insensitive substring of the title or description.
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl TicketFilter {
    fn matches(&self, ticket: &Ticket, needle: Option<&str>) -> bool {
        self.status.is_none_or(|s| ticket.status == s)
            && self.priority.is_none_or(|p| ticket.priority == p)
            && self
                .assigned_to
                .as_deref()
                .is_none_or(|id| ticket.is_assigned_to(id))
            && self
                .assigned_group_id
                .as_deref()
                .is_none_or(|id| ticket.assigned_group_id.as_deref() == Some(id))
            && self
                .created_by
                .as_deref()
                .is_none_or(|id| ticket.created_by == id)
            && needle.is_none_or(|needle| {
                ticket.title.to_lowercase().contains(needle)
                    || ticket.description.to_lowercase().contains(needle)
            })
    }
}

impl<S: KeyValueStorage> DeskStore<S> {
    /// Insert a ticket at the front of the list and persist it.
    ///
    /// When `assigned_group_id` names an existing group its members are
    /// notified; an unknown group id is stored as given without a notice.
    ///
    /// # Errors
    ///
    /// Returns an error if id generation or the storage write fails.
    pub fn create_ticket(&mut self, new: NewTicket) -> Result<Ticket, StoreError> {
        let id = fresh_id(PREFIX_TICKET, self.tickets.iter().map(|t| t.id.as_str()))?;
        let ticket = Ticket::from_new(id, new, Utc::now());

        let mut tickets = Vec::with_capacity(self.tickets.len() + 1);
        tickets.push(ticket.clone());
        tickets.extend(self.tickets.iter().cloned());
        self.commit(Collection::Tickets, tickets, |s| &mut s.tickets)?;
        tracing::debug!(ticket_id = %ticket.id, "created ticket");

        let group = ticket
            .assigned_group_id
            .as_deref()
            .and_then(|group_id| self.get_group(group_id));
        if let Some(group) = group {
            let notice = GroupNotice {
                ticket_id: ticket.id.clone(),
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                member_ids: group.member_ids.clone(),
            };
            self.notifier().notify_group(&notice);
        }

        Ok(ticket)
    }

    /// Merge `update` into ticket `id` and refresh `updated_at`.
    ///
    /// Returns `Ok(None)` without writing anything if no ticket has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn update_ticket(
        &mut self,
        id: &str,
        update: TicketUpdate,
    ) -> Result<Option<Ticket>, StoreError> {
        let Some(index) = self.tickets.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let mut tickets = self.tickets.clone();
        let ticket = &mut tickets[index];
        update.apply(ticket);
        ticket.updated_at = Utc::now().max(ticket.updated_at);
        let updated = ticket.clone();

        self.commit(Collection::Tickets, tickets, |s| &mut s.tickets)?;
        tracing::debug!(ticket_id = %id, status = %updated.status, "updated ticket");
        Ok(Some(updated))
    }

    /// Set the assignee of ticket `ticket_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn assign_ticket(
        &mut self,
        ticket_id: &str,
        user_id: &str,
    ) -> Result<Option<Ticket>, StoreError> {
        let update = TicketUpdateBuilder::new()
            .assigned_to(Some(user_id.to_string()))
            .build();
        self.update_ticket(ticket_id, update)
    }

    #[must_use]
    pub fn get_ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets matching `filter`, newest first.
    #[must_use]
    pub fn list_tickets(&self, filter: &TicketFilter) -> Vec<&Ticket> {
        let needle = filter.search.as_deref().map(str::to_lowercase);
        self.tickets
            .iter()
            .filter(|t| filter.matches(t, needle.as_deref()))
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect()
    }

    #[must_use]
    pub fn tickets_assigned_to(&self, user_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.is_assigned_to(user_id))
            .collect()
    }
}
