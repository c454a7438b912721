//! # desk-store
//!
//! The local helpdesk entity store.
//!
//! Holds the working set of tickets, comments, users, and groups in memory and
//! mirrors every collection to a [`KeyValueStorage`] on each mutation. A
//! collection missing from storage is seeded with fixed demo data on open.
//!
//! Mutations take `&mut self`: there is exactly one writer, and the last write
//! wins. A storage write replaces a whole collection blob at once.

pub mod auth;
pub mod demo;
pub mod error;
pub mod notify;
pub mod repos;
pub mod storage;
mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use auth::AuthStore;
pub use error::StoreError;
pub use notify::{GroupNotice, Notifier, RecordingNotifier, TracingNotifier};
pub use repos::guest::GuestTicketRequest;
pub use repos::tickets::TicketFilter;
pub use repos::users::UserProfile;
pub use storage::{Collection, FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{DeskStore, OpenOptions};
