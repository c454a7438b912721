//! Store error types for desk-store.

use desk_core::errors::CoreError;
use thiserror::Error;

/// Errors from the local entity store and its storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a storage entry failed.
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored collection blob is not valid JSON for its entity type.
    #[error("Corrupt collection '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized.
    #[error("Encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Storage keys are restricted to ASCII letters, digits, `_`, and `-`.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Domain error (not found, validation, ID generation).
    #[error(transparent)]
    Core(#[from] CoreError),
}
