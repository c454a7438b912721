use desk_core::entities::{Comment, Ticket};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TicketView<'a> {
    #[serde(flatten)]
    ticket: &'a Ticket,
    comments: Vec<&'a Comment>,
}

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ticket = ctx
        .store
        .get_ticket(id)
        .ok_or_else(|| anyhow::anyhow!("ticket not found: {id}"))?;
    let view = TicketView {
        ticket,
        comments: ctx.store.get_ticket_comments(id),
    };
    output(&view, flags.format)
}
