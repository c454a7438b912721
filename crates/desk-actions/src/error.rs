//! Action failure taxonomy and its mapping to result messages.

use desk_core::responses::ActionResult;
use desk_db::error::DatabaseError;
use thiserror::Error;

pub const UNAUTHORIZED: &str = "Unauthorized";
pub const INVALID_FIELDS: &str = "Invalid fields";
pub const CREATE_TICKET_FAILED: &str = "Failed to create ticket";
pub const UPDATE_STATUS_FAILED: &str = "Failed to update status";
pub const ADD_COMMENT_FAILED: &str = "Failed to add comment";

#[derive(Debug, Error)]
pub enum ActionError {
    /// No session, or a session without a user id.
    #[error("Unauthorized")]
    Unauthorized,

    /// Form input failed validation.
    #[error("Invalid fields: {0}")]
    InvalidFields(String),

    /// The store rejected the write.
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl ActionError {
    /// Wrap a database failure under the action's fixed message.
    pub(crate) fn persistence(message: &'static str) -> impl FnOnce(DatabaseError) -> Self {
        move |source| Self::Persistence { message, source }
    }

    /// The message callers see. Never includes store internals.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Unauthorized => UNAUTHORIZED,
            Self::InvalidFields(_) => INVALID_FIELDS,
            Self::Persistence { message, .. } => *message,
        }
    }
}

/// Convert an action outcome into its wire result, logging store failures.
pub(crate) fn finish(action: &str, outcome: Result<(), ActionError>) -> ActionResult {
    match outcome {
        Ok(()) => ActionResult::ok(),
        Err(err) => {
            match &err {
                ActionError::Persistence { source, .. } => {
                    tracing::error!(action, error = %source, "{}", err.message());
                }
                ActionError::InvalidFields(reason) => {
                    tracing::debug!(action, reason = %reason, "rejected form");
                }
                ActionError::Unauthorized => tracing::debug!(action, "rejected anonymous call"),
            }
            ActionResult::error(err.message())
        }
    }
}
