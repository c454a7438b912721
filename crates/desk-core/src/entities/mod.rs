//! Entity structs for all helpdesk domain objects.
//!
//! Field names serialize in `camelCase` (`createdBy`, `assignedGroupId`) so a
//! persisted collection blob reads the same as the browser storage it mirrors.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod comment;
mod group;
mod ticket;
mod user;

pub use comment::{Comment, NewComment};
pub use group::Group;
pub use ticket::{GUEST_CREATOR, NewTicket, Ticket};
pub use user::{User, avatar_url};
