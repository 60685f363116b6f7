//! Value-keyed adjacency maps.
//!
//! A graph here is a map from a key to the ordered list of its neighbors'
//! keys. Neighbor keys are not required to be keys of the map; traversals
//! treat such dangling neighbors as dead ends.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A map from each key to the keys of its neighbors.
pub trait AdjacencyList<T> {
    /// Returns the stored key equal to `key` and its neighbor list, or
    /// `None` if `key` is not a key of the graph.
    fn lookup(&self, key: &T) -> Option<(&T, &[T])>;

    /// Iterates every key of the graph.
    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Returns the number of keys.
    fn key_count(&self) -> usize;

    /// Returns `true` if `key` is a key of the graph.
    fn contains_key(&self, key: &T) -> bool {
        self.lookup(key).is_some()
    }
}

impl<T: Eq + Hash, S: BuildHasher> AdjacencyList<T> for HashMap<T, Vec<T>, S> {
    #[inline]
    fn lookup(&self, key: &T) -> Option<(&T, &[T])> {
        self.get_key_value(key).map(|(k, nbrs)| (k, nbrs.as_slice()))
    }

    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        HashMap::keys(self)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> AdjacencyList<T> for BTreeMap<T, Vec<T>> {
    #[inline]
    fn lookup(&self, key: &T) -> Option<(&T, &[T])> {
        self.get_key_value(key).map(|(k, nbrs)| (k, nbrs.as_slice()))
    }

    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        BTreeMap::keys(self)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}
