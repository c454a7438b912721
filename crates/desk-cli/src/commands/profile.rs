use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk profile <USER_ID>`.
pub fn handle(user_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user()?;
    let profile = ctx
        .store
        .profile(user_id)
        .ok_or_else(|| anyhow::anyhow!("user not found: {user_id}"))?;
    output(&profile, flags.format)
}
