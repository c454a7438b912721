mod comment;
mod create;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::context::AppContext;

/// Handle `desk ticket`.
pub fn handle(action: &TicketCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    match action {
        TicketCommands::Create {
            title,
            description,
            priority,
            assign_to,
            group,
        } => create::run(
            title,
            description,
            priority.as_deref(),
            assign_to.as_deref(),
            group.as_deref(),
            ctx,
            flags,
        ),
        TicketCommands::List(args) => list::run(args, ctx, flags),
        TicketCommands::Get { id } => get::run(id, ctx, flags),
        TicketCommands::Update {
            id,
            title,
            description,
            status,
            priority,
            group,
            unassign,
        } => update::run(
            id,
            &update::Fields {
                title: title.as_deref(),
                description: description.as_deref(),
                status: status.as_deref(),
                priority: priority.as_deref(),
                group: group.as_deref(),
                unassign: *unassign,
            },
            ctx,
            flags,
        ),
        TicketCommands::Assign { id, user_id } => update::assign(id, user_id, ctx, flags),
        TicketCommands::Comment { id, content } => comment::add(id, content, ctx, flags),
        TicketCommands::Comments { id } => comment::list(id, ctx, flags),
    }
}

pub(crate) fn require_staff(ctx: &AppContext, user_id: &str) -> anyhow::Result<()> {
    let user = ctx
        .store
        .get_user(user_id)
        .ok_or_else(|| anyhow::anyhow!("user not found: {user_id}"))?;
    if !user.role.is_staff() {
        anyhow::bail!("{} ({user_id}) is not staff and cannot take tickets", user.name);
    }
    Ok(())
}
