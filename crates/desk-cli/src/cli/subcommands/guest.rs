use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum GuestCommands {
    /// Report a facilities problem without an account.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        room: String,
        /// WIFI, PLUMBING, ELECTRICAL, FURNITURE, CLEANING, OTHER
        #[arg(long, default_value = "WIFI")]
        problem_type: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        email: Option<String>,
    },
}
