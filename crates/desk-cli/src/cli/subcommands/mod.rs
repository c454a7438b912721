pub mod group;
pub mod guest;
pub mod server;
pub mod ticket;
pub mod user;

pub use group::GroupCommands;
pub use guest::GuestCommands;
pub use server::{ServerArgs, ServerCommands};
pub use ticket::{TicketCommands, TicketListArgs};
pub use user::UserCommands;
