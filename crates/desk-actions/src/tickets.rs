use desk_core::enums::TicketStatus;
use desk_core::identity::Session;
use desk_core::responses::{ActionResult, Dashboard, TicketDetail, TicketListItem};
use desk_db::DeskDb;
use desk_db::error::DatabaseError;

use crate::error::{
    ADD_COMMENT_FAILED, ActionError, CREATE_TICKET_FAILED, UPDATE_STATUS_FAILED, finish,
};
use crate::form::TicketForm;
use crate::revalidate::{Revalidate, RevalidationLog, TICKETS_PATH, ticket_path};

/// Ticket actions bound to one database and one invalidation sink.
pub struct TicketActions<R: Revalidate = RevalidationLog> {
    db: DeskDb,
    revalidator: R,
}

impl TicketActions<RevalidationLog> {
    #[must_use]
    pub fn new(db: DeskDb) -> Self {
        Self::with_revalidator(db, RevalidationLog::new())
    }
}

/// The caller's user id, if the session carries one.
fn session_user(session: Option<&Session>) -> Result<&str, ActionError> {
    match session {
        Some(session) if !session.user_id.is_empty() => Ok(session.user_id.as_str()),
        _ => Err(ActionError::Unauthorized),
    }
}

impl<R: Revalidate> TicketActions<R> {
    #[must_use]
    pub const fn with_revalidator(db: DeskDb, revalidator: R) -> Self {
        Self { db, revalidator }
    }

    #[must_use]
    pub const fn db(&self) -> &DeskDb {
        &self.db
    }

    #[must_use]
    pub const fn revalidator(&self) -> &R {
        &self.revalidator
    }

    /// Create an `OPEN` ticket authored by the session user.
    ///
    /// Invalidates the ticket list on success.
    pub async fn create_ticket(&self, session: Option<&Session>, form: TicketForm) -> ActionResult {
        finish("create_ticket", self.try_create_ticket(session, form).await)
    }

    async fn try_create_ticket(
        &self,
        session: Option<&Session>,
        form: TicketForm,
    ) -> Result<(), ActionError> {
        let user_id = session_user(session)?;
        let valid = form.validate()?;
        let ticket = self
            .db
            .create_ticket(user_id, &valid.title, &valid.description, valid.priority)
            .await
            .map_err(ActionError::persistence(CREATE_TICKET_FAILED))?;
        tracing::info!(ticket_id = %ticket.id, user_id, "ticket created");
        self.revalidator.revalidate_path(TICKETS_PATH);
        Ok(())
    }

    /// All tickets newest first; empty without a session or on store failure.
    pub async fn get_tickets(&self, session: Option<&Session>) -> Vec<TicketListItem> {
        if session_user(session).is_err() {
            return Vec::new();
        }
        self.db
            .list_tickets_with_people()
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to list tickets");
                Vec::new()
            })
    }

    /// One ticket with people and comments; `None` without a session, for an
    /// unknown id, or on store failure.
    pub async fn get_ticket_by_id(
        &self,
        session: Option<&Session>,
        id: &str,
    ) -> Option<TicketDetail> {
        session_user(session).ok()?;
        self.db.get_ticket_detail(id).await.unwrap_or_else(|e| {
            tracing::error!(ticket_id = id, error = %e, "failed to load ticket");
            None
        })
    }

    /// Set a ticket's status. Invalidates that ticket's page on success.
    pub async fn update_ticket_status(
        &self,
        session: Option<&Session>,
        id: &str,
        status: TicketStatus,
    ) -> ActionResult {
        finish(
            "update_ticket_status",
            self.try_update_ticket_status(session, id, status).await,
        )
    }

    /// Comment on a ticket as the session user. Invalidates that ticket's
    /// page on success.
    pub async fn add_comment(
        &self,
        session: Option<&Session>,
        ticket_id: &str,
        content: &str,
    ) -> ActionResult {
        finish(
            "add_comment",
            self.try_add_comment(session, ticket_id, content).await,
        )
    }

    /// Ticket counts plus the `limit` newest tickets. Empty without a
    /// session or on store failure.
    pub async fn get_dashboard(
        &self,
        session: Option<&Session>,
        limit: u32,
    ) -> Dashboard<TicketListItem> {
        if session_user(session).is_err() {
            return Dashboard::default();
        }
        self.load_dashboard(limit).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load dashboard");
            Dashboard::default()
        })
    }

    async fn try_update_ticket_status(
        &self,
        session: Option<&Session>,
        id: &str,
        status: TicketStatus,
    ) -> Result<(), ActionError> {
        session_user(session)?;
        self.db
            .update_ticket_status(id, status)
            .await
            .map_err(ActionError::persistence(UPDATE_STATUS_FAILED))?;
        self.revalidator.revalidate_path(&ticket_path(id));
        Ok(())
    }

    async fn try_add_comment(
        &self,
        session: Option<&Session>,
        ticket_id: &str,
        content: &str,
    ) -> Result<(), ActionError> {
        let user_id = session_user(session)?;
        self.db
            .add_comment(ticket_id, user_id, content)
            .await
            .map_err(ActionError::persistence(ADD_COMMENT_FAILED))?;
        self.revalidator.revalidate_path(&ticket_path(ticket_id));
        Ok(())
    }

    async fn load_dashboard(
        &self,
        limit: u32,
    ) -> Result<Dashboard<TicketListItem>, DatabaseError> {
        Ok(Dashboard {
            stats: self.db.ticket_stats().await?,
            recent_tickets: self.db.recent_tickets(limit).await?,
        })
    }
}
