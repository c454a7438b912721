//! # desk-actions
//!
//! Server-side ticket actions over [`desk_db::DeskDb`].
//!
//! Every action takes the caller's session (or `None`). Mutations never
//! return `Err`: authorization, validation, and persistence failures all come
//! back as [`ActionResult::Error`] with a fixed human-readable message.
//! Reads degrade to empty or `None` instead.
//!
//! [`ActionResult::Error`]: desk_core::responses::ActionResult::Error

pub mod error;
pub mod form;
pub mod revalidate;
mod tickets;

pub use error::ActionError;
pub use form::{TicketForm, ValidTicket};
pub use revalidate::{Revalidate, RevalidationLog, TICKETS_PATH, ticket_path};
pub use tickets::TicketActions;
