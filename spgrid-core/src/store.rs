//! Keyed storage abstraction for sparse grids
//!
//! This module defines the associative-container capability a grid consumes.
//! It is a pure interface with no implementations: the grid does not care
//! whether the backend is a hash table, a sorted map, or a linear-scan list,
//! only that lookups are O(n) or better.

use crate::StoreError;

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Trait for containers that map cell keys to values
///
/// Absence of a key is meaningful to the consumer (the grid reads absent
/// cells as its default value), so `get` returns `None` rather than an
/// error for missing keys.
pub trait KeyedStore<K, V> {
    /// Look up the value stored for a key
    fn get(&self, key: &K) -> Option<&V>;

    /// Store a value for a key, overwriting any previous value
    ///
    /// A backend may reject a write; callers decide whether that is fatal.
    fn set(&mut self, key: K, value: V) -> Result<(), StoreError>;

    /// Check whether a key has a stored value
    fn has(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove and return the value stored for a key
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Check whether the store holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all stored keys, in unspecified order
    ///
    /// Consumers that need a deterministic result must not rely on the
    /// enumeration order.
    #[cfg(feature = "alloc")]
    fn keys(&self) -> Vec<K>
    where
        K: Copy;
}
