use desk_core::enums::ProblemType;
use desk_store::GuestTicketRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GuestCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk guest`. No sign-in is required.
pub fn handle(action: &GuestCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GuestCommands::Submit {
            name,
            room,
            problem_type,
            description,
            email,
        } => {
            let request = GuestTicketRequest {
                name: name.clone(),
                room: room.clone(),
                problem_type: parse_enum::<ProblemType>(problem_type, "problem type")?,
                description: description.clone(),
                email: email.clone(),
            };
            let ticket = ctx.store.submit_guest_ticket(request)?;
            output(&ticket, flags.format)
        }
    }
}
