//! Key-value storage backends.
//!
//! The store writes each collection as one JSON array under a fixed key, so a
//! backend only needs whole-value `get`, `set`, and `remove`.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreError;

/// Key holding the signed-in demo user.
pub const AUTH_USER_KEY: &str = "ticketing_auth_user";

/// A string-keyed, string-valued persistence backend.
///
/// `set` replaces the whole value for a key; a reader never observes a
/// partially written value.
pub trait KeyValueStorage {
    /// Read the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// The four persisted entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tickets,
    Comments,
    Users,
    Groups,
}

impl Collection {
    pub const ALL: [Self; 4] = [Self::Tickets, Self::Comments, Self::Users, Self::Groups];

    /// Storage key the collection blob lives under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tickets => "ticketing_data_tickets",
            Self::Comments => "ticketing_data_comments",
            Self::Users => "ticketing_data_users",
            Self::Groups => "ticketing_data_groups",
        }
    }
}

/// Reject keys that could escape a storage directory or collide on disk.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn collection_keys_are_distinct_and_valid() {
        let keys: std::collections::HashSet<_> =
            Collection::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), 4);
        for key in keys {
            assert!(validate_key(key).is_ok(), "{key}");
        }
        assert!(validate_key(AUTH_USER_KEY).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("../etc/passwd")]
    #[case("tickets.json")]
    #[case("with space")]
    fn invalid_keys_are_rejected(#[case] key: &str) {
        assert!(matches!(validate_key(key), Err(StoreError::InvalidKey(_))));
    }
}
