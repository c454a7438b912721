use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Invite a new user.
    Invite {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// MASTER_ADMIN, ADMIN, or USER
        #[arg(long, default_value = "USER")]
        role: String,
    },
    /// List all users.
    List {
        /// Only staff (admins)
        #[arg(long)]
        staff: bool,
    },
    /// Get a user by ID.
    Get { id: String },
}
