use desk_core::enums::Role;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk login <ROLE>`.
pub fn login(role: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = parse_enum::<Role>(role, "role")?;
    let user = ctx.auth.login(role)?;
    output(user, flags.format)
}

/// Handle `desk logout`.
pub fn logout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.auth.logout()?;
    output(&json!({ "signedIn": false }), flags.format)
}

/// Handle `desk whoami`.
pub fn whoami(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.auth.current() {
        Some(user) => output(user, flags.format),
        None => output(&json!({ "signedIn": false }), flags.format),
    }
}
