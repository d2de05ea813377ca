//! Hash map store backend

use core::hash::Hash;

use hashbrown::HashMap;
use spgrid_core::{KeyedStore, StoreError};

/// Keyed store backed by a hash map
///
/// This is the default backend for [`SparseMatrix`](crate::SparseMatrix):
/// O(1) expected lookup and insertion, no ordering guarantees.
#[derive(Debug, Clone)]
pub struct HashStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> HashStore<K, V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create an empty store sized for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for HashStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> KeyedStore<K, V> for HashStore<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn set(&mut self, key: K, value: V) -> Result<(), StoreError> {
        self.entries.insert(key, value);
        Ok(())
    }

    fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<K>
    where
        K: Copy,
    {
        self.entries.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spgrid_core::CellKey;

    #[test]
    fn test_set_get_remove() {
        let mut store = HashStore::new();
        store.set(CellKey::new(0, 0), 5u32).unwrap();
        store.set(CellKey::new(1, 2), 7).unwrap();

        assert_eq!(store.get(&CellKey::new(0, 0)), Some(&5));
        assert!(store.has(&CellKey::new(1, 2)));
        assert!(!store.has(&CellKey::new(2, 1)));
        assert_eq!(store.len(), 2);

        assert_eq!(store.remove(&CellKey::new(0, 0)), Some(5));
        assert_eq!(store.get(&CellKey::new(0, 0)), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = HashStore::new();
        store.set(CellKey::new(0, 0), 1u32).unwrap();
        store.set(CellKey::new(0, 0), 2).unwrap();

        assert_eq!(store.get(&CellKey::new(0, 0)), Some(&2));
        assert_eq!(store.len(), 1);
    }
}
