use desk_core::entities::NewComment;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn add(id: &str, content: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let author = ctx.require_user()?.id.clone();
    if content.trim().is_empty() {
        anyhow::bail!("comment must not be empty");
    }
    let comment = ctx.store.add_comment(NewComment::new(id, content, author))?;
    output(&comment, flags.format)
}

pub fn list(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.store.get_ticket(id).is_none() {
        anyhow::bail!("ticket not found: {id}");
    }
    output(&ctx.store.get_ticket_comments(id), flags.format)
}
