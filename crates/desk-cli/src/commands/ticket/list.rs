use desk_core::enums::{TicketPriority, TicketStatus};
use desk_store::TicketFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketListArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &TicketListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = flags.limit.unwrap_or(ctx.config.general.default_limit);

    let assigned_to = if args.mine {
        Some(ctx.require_user()?.id.clone())
    } else {
        args.assigned_to.clone()
    };

    let filter = TicketFilter {
        status: args
            .status
            .as_deref()
            .map(|raw| parse_enum::<TicketStatus>(raw, "status"))
            .transpose()?,
        priority: args
            .priority
            .as_deref()
            .map(|raw| parse_enum::<TicketPriority>(raw, "priority"))
            .transpose()?,
        assigned_to,
        assigned_group_id: args.group.clone(),
        created_by: None,
        search: args.search.clone(),
        limit: Some(usize::try_from(limit)?),
    };

    let tickets = ctx.store.list_tickets(&filter);
    output(&tickets, flags.format)
}
