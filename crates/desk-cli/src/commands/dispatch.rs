use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Login { role } => commands::auth::login(&role, ctx, flags),
        Commands::Logout => commands::auth::logout(ctx, flags),
        Commands::Whoami => commands::auth::whoami(ctx, flags),
        Commands::Dashboard { recent } => commands::dashboard::handle(recent, ctx, flags),
        Commands::Ticket { action } => commands::ticket::handle(&action, ctx, flags),
        Commands::Guest { action } => commands::guest::handle(&action, ctx, flags),
        Commands::User { action } => commands::user::handle(&action, ctx, flags),
        Commands::Group { action } => commands::group::handle(&action, ctx, flags),
        Commands::Profile { user_id } => commands::profile::handle(&user_id, ctx, flags),
        Commands::Gate(_) | Commands::Server(_) => {
            unreachable!("gate/server are pre-dispatched in main")
        }
    }
}
