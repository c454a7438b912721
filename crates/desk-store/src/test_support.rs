//! Shared fixtures for desk-store unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::StoreError;
use crate::notify::RecordingNotifier;
use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::store::DeskStore;

/// A demo-seeded store over in-memory storage.
pub(crate) fn seeded_store() -> DeskStore<MemoryStorage> {
    DeskStore::open(MemoryStorage::new()).unwrap()
}

/// A seeded store whose group notices land in the returned recorder.
pub(crate) fn recording_store() -> (DeskStore<MemoryStorage>, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let store = seeded_store().with_notifier(recorder.clone());
    (store, recorder)
}

/// Memory storage whose writes start failing once the shared switch is on.
#[derive(Debug, Default)]
pub(crate) struct FailingStorage {
    inner: MemoryStorage,
    fail_writes: Rc<Cell<bool>>,
}

impl FailingStorage {
    /// A handle that turns write failures on and off after the store owns the storage.
    pub(crate) fn switch(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fail_writes)
    }

    pub(crate) fn inner(&self) -> &MemoryStorage {
        &self.inner
    }
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

/// A seeded store over [`FailingStorage`] plus its failure switch.
pub(crate) fn failing_store() -> (DeskStore<FailingStorage>, Rc<Cell<bool>>) {
    let storage = FailingStorage::default();
    let switch = storage.switch();
    (DeskStore::open(storage).unwrap(), switch)
}
