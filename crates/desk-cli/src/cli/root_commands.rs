use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    GroupCommands, GuestCommands, ServerArgs, TicketCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in as the demo account for a role.
    Login {
        /// MASTER_ADMIN, ADMIN, or USER
        role: String,
    },
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Ticket counts and the most recent tickets.
    Dashboard {
        /// Number of recent tickets (defaults to general.recent_tickets)
        #[arg(long)]
        recent: Option<u32>,
    },
    /// Tickets.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Public guest reports (no sign-in needed).
    Guest {
        #[command(subcommand)]
        action: GuestCommands,
    },
    /// User accounts (master admin only).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Support groups.
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// A user's assigned tickets and groups.
    Profile {
        user_id: String,
    },
    /// Check whether a page path needs a session.
    Gate(GateArgs),
    /// Session-gated actions against the relational store.
    Server(ServerArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GateArgs {
    /// Page path, e.g. /tickets/t1
    pub path: String,
    /// Evaluate as if a session were present
    #[arg(long)]
    pub signed_in: bool,
}
