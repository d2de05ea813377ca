//! Linear-scan store backend

use spgrid_core::{KeyedStore, StoreError};

/// Keyed store backed by an unsorted association list
///
/// Lookup and removal scan the whole list, so every operation is O(n).
/// That is adequate for small grids and keeps this backend free of any
/// hashing requirement on the key type.
#[derive(Debug, Clone)]
pub struct VecStore<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> VecStore<K, V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> Default for VecStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> KeyedStore<K, V> for VecStore<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value)
    }

    fn set(&mut self, key: K, value: V) -> Result<(), StoreError> {
        match self.entries.iter_mut().find(|(stored, _)| *stored == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        Ok(())
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.entries.iter().position(|(stored, _)| stored == key)?;
        Some(self.entries.swap_remove(index).1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<K>
    where
        K: Copy,
    {
        self.entries.iter().map(|(key, _)| *key).collect()
    }
}
