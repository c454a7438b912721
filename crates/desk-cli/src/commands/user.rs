use desk_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk user`. Restricted to the master admin.
pub fn handle(action: &UserCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user_manager()?;
    match action {
        UserCommands::Invite { email, name, role } => {
            let role = parse_enum::<Role>(role, "role")?;
            let user = ctx.store.invite_user(email, role, name)?;
            output(&user, flags.format)
        }
        UserCommands::List { staff } => {
            if *staff {
                output(&ctx.store.staff_users(), flags.format)
            } else {
                output(&ctx.store.users(), flags.format)
            }
        }
        UserCommands::Get { id } => {
            let user = ctx
                .store
                .get_user(id)
                .ok_or_else(|| anyhow::anyhow!("user not found: {id}"))?;
            output(user, flags.format)
        }
    }
}
