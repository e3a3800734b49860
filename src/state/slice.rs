//! One named, persisted piece of UI state.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::state::mvi::Reducer;
use crate::state::reducer::{Record, SliceIntent, SliceReducer};
use crate::storage::Storage;

/// A persisted sequence of records under a fixed storage key.
///
/// Cloning yields another handle to the same slice. The in-memory value is
/// authoritative: storage failures are logged and otherwise ignored.
pub struct Slice<T: Record> {
    inner: Arc<SliceInner<T>>,
}

struct SliceInner<T> {
    key: &'static str,
    storage: Arc<dyn Storage>,
    value: watch::Sender<Vec<T>>,
    // Serializes commits so storage sees writes in the same order as memory.
    commit: Mutex<()>,
}

impl<T: Record> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> Slice<T> {
    /// Rehydrate the slice stored under `key`.
    ///
    /// Missing, unreadable and malformed values all start empty.
    pub fn load(key: &'static str, storage: Arc<dyn Storage>) -> Self {
        let initial = match storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(slice = key, "Discarding malformed persisted state: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(slice = key, "Failed to read persisted state: {}", e);
                Vec::new()
            }
        };

        let (value, _) = watch::channel(initial);
        Self {
            inner: Arc::new(SliceInner {
                key,
                storage,
                value,
                commit: Mutex::new(()),
            }),
        }
    }

    /// Storage key of this slice.
    pub fn key(&self) -> &'static str {
        self.inner.key
    }

    /// Current value.
    pub fn get(&self) -> Vec<T> {
        self.inner.value.borrow().clone()
    }

    /// Receiver notified on every committed value.
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.inner.value.subscribe()
    }

    /// Replace the value, notify subscribers and write through.
    pub fn set(&self, value: Vec<T>) {
        let _guard = self.inner.commit.lock();
        self.commit(value);
    }

    /// Apply `intent` through the reducer.
    ///
    /// Returns `false` when the intent left the value unchanged, in which
    /// case nothing is notified or written.
    pub fn dispatch(&self, intent: SliceIntent<T>) -> bool {
        let _guard = self.inner.commit.lock();
        let current = self.get();
        let next = SliceReducer::<T>::reduce(current.clone(), intent);
        if next == current {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn append(&self, item: T) {
        self.dispatch(SliceIntent::Append(item));
    }

    /// Remove the record at `index`; returns whether anything was removed.
    pub fn remove_at(&self, index: usize) -> bool {
        self.dispatch(SliceIntent::RemoveAt(index))
    }

    pub fn clear(&self) {
        self.dispatch(SliceIntent::Clear);
    }

    fn commit(&self, value: Vec<T>) {
        self.persist(&value);
        self.inner.value.send_replace(value);
    }

    fn persist(&self, value: &[T]) {
        let key = self.inner.key;
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(slice = key, "Failed to serialize state: {}", e);
                return;
            }
        };
        if let Err(e) = self.inner.storage.set(key, &raw) {
            tracing::warn!(slice = key, "Failed to persist state: {}", e);
        }
    }
}
