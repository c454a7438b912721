//! Partial-field updates for tickets and groups.
//!
//! A `None` field leaves the stored value alone. Nullable fields use
//! `Option<Option<_>>` so an update can clear them.

pub mod group;
pub mod ticket;

pub use group::{GroupUpdate, GroupUpdateBuilder};
pub use ticket::{TicketUpdate, TicketUpdateBuilder};
