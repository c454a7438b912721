//! ID prefix constants and random ID generation.
//!
//! IDs look like `tkt-a3f8b2c1`: a three-letter prefix naming the entity kind,
//! a dash, and eight lowercase hex characters from the system random source.

use std::fmt::Write;

use crate::errors::CoreError;

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_TICKET: &str = "tkt";
pub const PREFIX_COMMENT: &str = "cmt";
pub const PREFIX_GROUP: &str = "grp";

pub const ALL_PREFIXES: [&str; 4] = [PREFIX_USER, PREFIX_TICKET, PREFIX_COMMENT, PREFIX_GROUP];

/// Generate a prefixed random ID, e.g. `"tkt-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the system random source fails.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;

    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    Ok(id)
}

/// Generate an ID that `taken` reports as unused.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the random source fails.
pub fn generate_unique_id(
    prefix: &str,
    taken: impl Fn(&str) -> bool,
) -> Result<String, CoreError> {
    loop {
        let id = generate_id(prefix)?;
        if !taken(&id) {
            return Ok(id);
        }
    }
}
