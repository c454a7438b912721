use anyhow::Context;
use desk_actions::{TicketActions, TicketForm};
use desk_config::DeskConfig;
use desk_core::enums::{Role, TicketStatus};
use desk_core::identity::Session;
use desk_core::responses::ActionResult;
use desk_db::DeskDb;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ServerArgs, ServerCommands};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `desk server`: run one action against the relational store.
///
/// `--as <USER_ID>` attaches a session for that user; without it every action
/// runs anonymously and is refused or returns empty data.
pub async fn handle(args: ServerArgs, config: &DeskConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = bootstrap::database_path(config)?;
    let db = DeskDb::open_local(&path)
        .await
        .with_context(|| format!("failed to open database at {path}"))?;
    let session = args.as_user.map(Session::for_user_id);
    let session = session.as_ref();

    match args.action {
        ServerCommands::AddUser { name, email, role } => {
            let role = parse_enum::<Role>(&role, "role")?;
            let user = db.create_user(&name, &email, role).await?;
            output(&user, flags.format)
        }
        ServerCommands::Users => output(&db.list_users().await?, flags.format),
        ServerCommands::CreateTicket {
            title,
            description,
            priority,
        } => {
            let actions = TicketActions::new(db);
            let form = TicketForm {
                title,
                description,
                priority,
            };
            report(&actions.create_ticket(session, form).await, flags)
        }
        ServerCommands::Tickets => {
            let actions = TicketActions::new(db);
            output(&actions.get_tickets(session).await, flags.format)
        }
        ServerCommands::Ticket { id } => {
            let actions = TicketActions::new(db);
            output(&actions.get_ticket_by_id(session, &id).await, flags.format)
        }
        ServerCommands::Status { id, status } => {
            let status = parse_enum::<TicketStatus>(&status, "status")?;
            let actions = TicketActions::new(db);
            report(&actions.update_ticket_status(session, &id, status).await, flags)
        }
        ServerCommands::Comment { id, content } => {
            let actions = TicketActions::new(db);
            report(&actions.add_comment(session, &id, &content).await, flags)
        }
        ServerCommands::Dashboard { recent } => {
            let limit = effective_limit(recent, flags.limit, config.general.recent_tickets);
            let actions = TicketActions::new(db);
            output(&actions.get_dashboard(session, limit).await, flags.format)
        }
    }
}

/// Print the action result and fail the process when it carries an error.
fn report(result: &ActionResult, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(result, flags.format)?;
    match result.error_message() {
        Some(message) => anyhow::bail!("{message}"),
        None => Ok(()),
    }
}
