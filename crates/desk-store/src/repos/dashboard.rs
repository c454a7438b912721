use desk_core::entities::Ticket;
use desk_core::enums::TicketStatus;
use desk_core::responses::{Dashboard, TicketStats};

use crate::storage::KeyValueStorage;
use crate::store::DeskStore;

impl<S: KeyValueStorage> DeskStore<S> {
    #[must_use]
    pub fn ticket_stats(&self) -> TicketStats {
        let count = |status: TicketStatus| {
            self.tickets.iter().filter(|t| t.status == status).count() as u64
        };
        TicketStats {
            total: self.tickets.len() as u64,
            open: count(TicketStatus::Open),
            resolved: count(TicketStatus::Resolved),
        }
    }

    /// The `limit` most recently created tickets, newest first.
    #[must_use]
    pub fn recent_tickets(&self, limit: usize) -> Vec<&Ticket> {
        let mut tickets: Vec<&Ticket> = self.tickets.iter().collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets.truncate(limit);
        tickets
    }

    #[must_use]
    pub fn dashboard(&self, limit: usize) -> Dashboard<Ticket> {
        Dashboard {
            stats: self.ticket_stats(),
            recent_tickets: self.recent_tickets(limit).into_iter().cloned().collect(),
        }
    }
}
