use desk_core::enums::{TicketPriority, TicketStatus};
use desk_store::updates::ticket::TicketUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Fields<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub group: Option<&'a str>,
    pub unassign: bool,
}

pub fn run(id: &str, fields: &Fields<'_>, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = TicketUpdateBuilder::new();
    if let Some(title) = fields.title {
        builder = builder.title(title);
    }
    if let Some(description) = fields.description {
        builder = builder.description(description);
    }
    if let Some(status) = fields.status {
        builder = builder.status(parse_enum::<TicketStatus>(status, "status")?);
    }
    if let Some(priority) = fields.priority {
        builder = builder.priority(parse_enum::<TicketPriority>(priority, "priority")?);
    }
    if let Some(group) = fields.group {
        builder = builder.assigned_group(Some(group.to_string()));
    }
    if fields.unassign {
        builder = builder.assigned_to(None);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("ticket update requires at least one field");
    }

    let ticket = ctx
        .store
        .update_ticket(id, update)?
        .ok_or_else(|| anyhow::anyhow!("ticket not found: {id}"))?;
    output(&ticket, flags.format)
}

pub fn assign(id: &str, user_id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::require_staff(ctx, user_id)?;
    let ticket = ctx
        .store
        .assign_ticket(id, user_id)?
        .ok_or_else(|| anyhow::anyhow!("ticket not found: {id}"))?;
    output(&ticket, flags.format)
}
