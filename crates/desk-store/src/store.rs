use chrono::Utc;
use desk_core::entities::{Comment, Group, Ticket, User};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::demo;
use crate::error::StoreError;
use crate::notify::{Notifier, TracingNotifier};
use crate::storage::{Collection, KeyValueStorage};

/// How [`DeskStore::open_with`] treats collections missing from storage.
#[derive(Debug, Clone, Copy)]
pub struct OpenOptions {
    /// Seed missing tickets, users, and groups with demo data and write the
    /// seed back. When false, missing collections start empty and unwritten.
    pub seed_demo_data: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

/// In-memory working set of tickets, comments, users, and groups mirrored to
/// a [`KeyValueStorage`].
///
/// Tickets are kept newest-first (creation prepends); the other collections
/// keep insertion order. Every mutation rewrites the touched collection.
pub struct DeskStore<S: KeyValueStorage> {
    storage: S,
    notifier: Box<dyn Notifier>,
    pub(crate) tickets: Vec<Ticket>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) users: Vec<User>,
    pub(crate) groups: Vec<Group>,
}

impl<S: KeyValueStorage> DeskStore<S> {
    /// Load every collection from `storage`, seeding missing ones with demo
    /// data.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if a stored blob does not decode, or a
    /// storage error if reading or writing the seed fails.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        Self::open_with(storage, OpenOptions::default())
    }

    /// Load every collection from `storage` with explicit seeding behaviour.
    ///
    /// # Errors
    ///
    /// See [`DeskStore::open`].
    pub fn open_with(mut storage: S, options: OpenOptions) -> Result<Self, StoreError> {
        let now = Utc::now();
        let seed = options.seed_demo_data;

        let tickets = load_collection(
            &mut storage,
            Collection::Tickets,
            seed.then(|| demo::demo_tickets(now)),
        )?;
        let comments = load_collection(&mut storage, Collection::Comments, None)?;
        let users = load_collection(&mut storage, Collection::Users, seed.then(demo::demo_users))?;
        let groups = load_collection(
            &mut storage,
            Collection::Groups,
            seed.then(|| demo::demo_groups(now)),
        )?;

        tracing::debug!(
            tickets = tickets.len(),
            comments = comments.len(),
            users = users.len(),
            groups = groups.len(),
            "loaded desk store"
        );

        Ok(Self {
            storage,
            notifier: Box::new(TracingNotifier),
            tickets,
            comments,
            users,
            groups,
        })
    }

    /// Replace the notifier that receives group notices.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// All tickets, newest first.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// All comments in insertion order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Write `candidate` as the new blob for `collection` and only then make
    /// it the working set. A failed write leaves memory and storage as they
    /// were.
    pub(crate) fn commit<T: Serialize>(
        &mut self,
        collection: Collection,
        candidate: Vec<T>,
        slot: fn(&mut Self) -> &mut Vec<T>,
    ) -> Result<(), StoreError> {
        write_collection(&mut self.storage, collection, &candidate)?;
        *slot(self) = candidate;
        Ok(())
    }
}

fn load_collection<S: KeyValueStorage, T: Serialize + DeserializeOwned>(
    storage: &mut S,
    collection: Collection,
    seed: Option<Vec<T>>,
) -> Result<Vec<T>, StoreError> {
    let key = collection.key();
    if let Some(blob) = storage.get(key)? {
        return serde_json::from_str(&blob).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        });
    }
    match seed {
        Some(items) => {
            tracing::debug!(key, items = items.len(), "seeding missing collection");
            write_collection(storage, collection, &items)?;
            Ok(items)
        }
        None => Ok(Vec::new()),
    }
}

fn write_collection<S: KeyValueStorage, T: Serialize>(
    storage: &mut S,
    collection: Collection,
    items: &[T],
) -> Result<(), StoreError> {
    let blob = serde_json::to_string(items)?;
    storage.set(collection.key(), &blob)?;
    tracing::trace!(key = collection.key(), items = items.len(), "persisted collection");
    Ok(())
}
