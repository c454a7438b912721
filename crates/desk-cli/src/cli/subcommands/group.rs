use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum GroupCommands {
    /// Create a group of staff members.
    Create {
        #[arg(long)]
        name: String,
        /// Member user ID (repeatable)
        #[arg(long = "member")]
        members: Vec<String>,
    },
    /// Rename a group or replace its members.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Member user ID (repeatable); replaces the member list
        #[arg(long = "member")]
        members: Vec<String>,
        /// Remove every member
        #[arg(long, conflicts_with = "members")]
        clear_members: bool,
    },
    /// List groups.
    List,
}
