//! Store operations, one module per entity.
//!
//! Each module adds an `impl DeskStore` block; lookups borrow from the working
//! set, mutations persist the touched collection before returning.

pub mod comments;
pub mod dashboard;
pub mod groups;
pub mod guest;
pub mod tickets;
pub mod users;

use desk_core::ids::generate_unique_id;

use crate::error::StoreError;

/// Fresh id under `prefix` not already used in `existing`.
pub(crate) fn fresh_id<'a>(
    prefix: &str,
    existing: impl Iterator<Item = &'a str> + Clone,
) -> Result<String, StoreError> {
    Ok(generate_unique_id(prefix, |candidate| {
        existing.clone().any(|id| id == candidate)
    })?)
}
