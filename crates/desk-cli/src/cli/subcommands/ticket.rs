use clap::{Args, Subcommand};

/// Ticket commands against the local store.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// Create a ticket as the signed-in user.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// LOW, MEDIUM (default), HIGH, URGENT
        #[arg(long)]
        priority: Option<String>,
        /// Assignee user ID
        #[arg(long)]
        assign_to: Option<String>,
        /// Group ID to route the ticket to
        #[arg(long)]
        group: Option<String>,
    },
    /// List tickets, newest first.
    List(TicketListArgs),
    /// Get a ticket with its comments.
    Get { id: String },
    /// Update ticket fields.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        group: Option<String>,
        /// Remove the assignee
        #[arg(long)]
        unassign: bool,
    },
    /// Assign a ticket to a user.
    Assign { id: String, user_id: String },
    /// Comment on a ticket.
    Comment { id: String, content: String },
    /// List a ticket's comments, oldest first.
    Comments { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct TicketListArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub assigned_to: Option<String>,
    #[arg(long)]
    pub group: Option<String>,
    /// Only tickets assigned to the signed-in user
    #[arg(long, conflicts_with = "assigned_to")]
    pub mine: bool,
    /// Case-insensitive text in the title or description
    #[arg(long)]
    pub search: Option<String>,
}
