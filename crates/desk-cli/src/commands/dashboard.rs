use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk dashboard`.
pub fn handle(recent: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    let limit = effective_limit(recent, flags.limit, ctx.config.general.recent_tickets);
    let dashboard = ctx.store.dashboard(usize::try_from(limit)?);
    output(&dashboard, flags.format)
}
