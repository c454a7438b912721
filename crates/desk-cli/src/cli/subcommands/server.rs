use clap::{Args, Subcommand};

#[derive(Clone, Debug, Args)]
pub struct ServerArgs {
    /// Act with a session for this user ID (omit for an anonymous call)
    #[arg(long = "as", global = true)]
    pub as_user: Option<String>,

    #[command(subcommand)]
    pub action: ServerCommands,
}

/// Session-gated actions over the relational store.
#[derive(Clone, Debug, Subcommand)]
pub enum ServerCommands {
    /// Provision an account in the relational store.
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "USER")]
        role: String,
    },
    /// Accounts in the relational store, oldest first.
    Users,
    /// Create a ticket authored by the session user.
    CreateTicket {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// All tickets with creator and assignee.
    Tickets,
    /// One ticket with people and comments.
    Ticket { id: String },
    /// Change a ticket's status.
    Status { id: String, status: String },
    /// Comment on a ticket.
    Comment { id: String, content: String },
    /// Counts and recent tickets.
    Dashboard {
        #[arg(long)]
        recent: Option<u32>,
    },
}
