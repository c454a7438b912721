use desk_actions::TicketForm;
use desk_core::entities::NewTicket;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    title: &str,
    description: &str,
    priority: Option<&str>,
    assign_to: Option<&str>,
    group: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let creator = ctx.require_user()?.id.clone();

    let mut form = TicketForm::new(title, description);
    if let Some(priority) = priority {
        form = form.priority(priority.to_ascii_uppercase());
    }
    let valid = form.validate()?;

    let mut new = NewTicket::new(valid.title, valid.description, valid.priority, creator);
    if let Some(user_id) = assign_to {
        super::require_staff(ctx, user_id)?;
        new = new.assigned_to(user_id);
    }
    if let Some(group_id) = group {
        if ctx.store.get_group(group_id).is_none() {
            tracing::warn!(group_id, "routing ticket to unknown group; no one will be notified");
        }
        new = new.assigned_group(group_id);
    }

    let ticket = ctx.store.create_ticket(new)?;
    output(&ticket, flags.format)
}
