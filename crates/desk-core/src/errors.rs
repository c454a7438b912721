//! Cross-cutting error types for the helpdesk.
//!
//! Domain-specific errors (`StoreError`, `DatabaseError`, `ActionError`) are
//! defined in their respective crates. The CLI converges everything on
//! `anyhow`.

use thiserror::Error;

use crate::enums::Role;

/// Errors that can be raised by any helpdesk crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required fields, formats, enumerated values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// No authenticated user is attached to the request.
    #[error("Unauthorized")]
    Unauthorized,

    /// The authenticated user's role does not permit the action.
    #[error("Forbidden: {action} requires {required}, current role is {actual}")]
    Forbidden {
        action: String,
        required: Role,
        actual: Role,
    },

    /// The system random source failed while generating an ID.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),
}
