use desk_store::updates::GroupUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GroupCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk group`. Listing needs a session; changes need the master admin.
pub fn handle(action: &GroupCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GroupCommands::List => {
            ctx.require_user()?;
            output(&ctx.store.groups(), flags.format)
        }
        GroupCommands::Create { name, members } => {
            ctx.require_group_manager()?;
            if name.trim().is_empty() {
                anyhow::bail!("group name must not be empty");
            }
            require_staff_members(ctx, members)?;
            let group = ctx.store.create_group(name, members.clone())?;
            output(&group, flags.format)
        }
        GroupCommands::Update {
            id,
            name,
            members,
            clear_members,
        } => {
            ctx.require_group_manager()?;
            let mut builder = GroupUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if *clear_members {
                builder = builder.member_ids(Vec::new());
            } else if !members.is_empty() {
                require_staff_members(ctx, members)?;
                builder = builder.member_ids(members.clone());
            }
            let update = builder.build();
            if update.name.is_none() && update.member_ids.is_none() {
                anyhow::bail!("group update requires --name, --member, or --clear-members");
            }
            let group = ctx
                .store
                .update_group(id, update)?
                .ok_or_else(|| anyhow::anyhow!("group not found: {id}"))?;
            output(&group, flags.format)
        }
    }
}

fn require_staff_members(ctx: &AppContext, members: &[String]) -> anyhow::Result<()> {
    for member in members {
        crate::commands::ticket::require_staff(ctx, member)?;
    }
    Ok(())
}
