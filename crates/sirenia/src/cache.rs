//! Segmented LRU map used to memoize per-row element lists.
//!
//! New entries land in a probation segment; a second hit promotes them into the protected
//! segment. Rows touched once while the viewport jumps around therefore cannot push out the rows
//! that are being repainted over and over.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct SlruCache<K, V> {
    // Both segments keep least recently used entries at the front.
    protected: IndexMap<K, V, FxBuildHasher>,
    probation: IndexMap<K, V, FxBuildHasher>,
    protected_capacity: usize,
    probation_capacity: usize,
}

impl<K, V> SlruCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new(protected_capacity: usize, probation_capacity: usize) -> Self {
        Self {
            protected: IndexMap::with_capacity_and_hasher(protected_capacity, FxBuildHasher),
            probation: IndexMap::with_capacity_and_hasher(probation_capacity, FxBuildHasher),
            protected_capacity,
            probation_capacity,
        }
    }

    /// A cache with a probation window twice the protected capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, capacity.saturating_mul(2))
    }

    pub fn len(&self) -> usize {
        self.protected.len() + self.probation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protected.is_empty() && self.probation.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.protected.contains_key(key) || self.probation.contains_key(key)
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        if let Some(ix) = self.protected.get_index_of(key) {
            let last = self.protected.len() - 1;
            self.protected.move_index(ix, last);
            return self.protected.get_index(last).map(|(_, v)| v.clone());
        }

        let (key, value) = self.probation.shift_remove_entry(key)?;
        let hit = value.clone();
        self.insert_protected(key, value);
        Some(hit)
    }

    pub fn put(&mut self, key: K, value: V) {
        if let Some(ix) = self.protected.get_index_of(&key) {
            self.protected[ix] = value;
            let last = self.protected.len() - 1;
            self.protected.move_index(ix, last);
            return;
        }
        self.probation.shift_remove(&key);
        self.insert_probation(key, value);
    }

    pub fn clear(&mut self) {
        self.protected.clear();
        self.probation.clear();
    }

    fn insert_protected(&mut self, key: K, value: V) {
        self.protected.insert(key, value);
        while self.protected.len() > self.protected_capacity {
            let Some((demoted_key, demoted)) = self.protected.shift_remove_index(0) else {
                break;
            };
            self.insert_probation(demoted_key, demoted);
        }
    }

    fn insert_probation(&mut self, key: K, value: V) {
        self.probation.insert(key, value);
        while self.probation.len() > self.probation_capacity {
            if self.probation.shift_remove_index(0).is_none() {
                break;
            }
        }
    }
}
