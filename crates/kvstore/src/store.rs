//! Thread-safe in-memory key-value store
//!
//! ## Design
//!
//! The store is a text-to-text map guarded by a single reader/writer lock.
//! It knows nothing about the host runtime; primitives translate boundary
//! values into these calls and back.
//!
//! ## Thread Safety
//!
//! `Store` is `Send + Sync`. Mutations take the lock exclusively, reads take
//! it shared, and every critical section is bounded (no I/O, no callbacks
//! while holding the lock). Uses `parking_lot::RwLock` instead of
//! `std::sync::RwLock` so a panicking writer cannot poison the lock for
//! later callers.
//!
//! ## API
//!
//! - **Mutation**: `set`, `delete`, `clear`, `drain`
//! - **Query**: `get`, `keys`, `count`, `is_empty`
//!
//! Query results are copies; no reference into the live map ever escapes the
//! lock.

use parking_lot::RwLock;
use std::collections::HashMap;

/// Text-to-text map guarded by a reader/writer lock
///
/// One store instance is owned by one extension instance; primitives reach
/// it through a shared handle. Snapshot methods (`get`, `keys`) copy out
/// under the lock, so a snapshot is never affected by later mutation.
///
/// # Example
///
/// ```
/// use mica_kvstore::Store;
///
/// let store = Store::new();
/// store.set("host", "localhost");
/// assert_eq!(store.get("host"), Some("localhost".to_string()));
/// assert_eq!(store.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Store {
    entries: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Store::default()
    }

    // ========== Mutation ==========

    /// Insert or overwrite the value under `key`
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(key.into(), value.into());
    }

    /// Remove `key`; absent keys are a no-op
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Remove all entries
    ///
    /// Atomic with respect to concurrent readers: a reader sees the map
    /// either fully populated or fully empty, never in between.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Discard all entries, returning how many were dropped
    ///
    /// Runs once at extension close. The store stays usable (empty)
    /// afterwards; rejecting post-close calls is the host's contract, not
    /// the store's.
    pub fn drain(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    // ========== Query ==========

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Snapshot of all keys, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
