//! Visited sets for depth-first traversals.
//!
//! This provides two implementations behind the [`Visited`] trait:
//! - `VisitedNodes`: node identities ([`NodeId`]) for borrowed node graphs
//! - `VisitedKeys`: borrowed keys for value-keyed adjacency maps
//!
//! Traversals only ever move a node from "unvisited" to "visited"; the only
//! way back is [`Visited::clear`], which forgets everything at once.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::graph::node::{Node, NodeId};

/// Bookkeeping that records which nodes a traversal has already entered.
pub trait Visited<K> {
    /// Returns `true` iff this call observed `key` as not-yet-visited and
    /// marks it visited.
    fn try_visit(&mut self, key: K) -> bool;

    /// Returns `true` if `key` has been visited.
    fn is_visited(&self, key: &K) -> bool;

    /// Returns the number of visited keys.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been visited yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every visited key.
    fn clear(&mut self);
}

impl<K, V: Visited<K> + ?Sized> Visited<K> for &mut V {
    #[inline]
    fn try_visit(&mut self, key: K) -> bool {
        (**self).try_visit(key)
    }

    #[inline]
    fn is_visited(&self, key: &K) -> bool {
        (**self).is_visited(key)
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }
}

/// A visited set keyed by node identity.
///
/// Can be handed to the `*_with_visited` queries to continue a traversal
/// across several calls; nodes already recorded here are skipped.
///
/// The set holds the borrow `'a` of every node it records, so a recorded
/// node stays alive (and its address stays its own) for as long as the set
/// is in use:
///
/// ```compile_fail
/// use waypoint::{longest_word_with_visited, Vertex, Visited, VisitedNodes};
///
/// let mut visited = VisitedNodes::new();
/// for word in ["fig", "kiwi"] {
///     let v = Vertex::new(word);
///     longest_word_with_visited(&v, &mut visited);
/// }
/// assert_eq!(visited.len(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct VisitedNodes<'a> {
    ids: HashSet<NodeId>,
    _nodes: PhantomData<&'a ()>,
}

impl<'a> VisitedNodes<'a> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `node` has been visited.
    #[inline]
    pub fn contains<N: Node<'a>>(&self, node: &N) -> bool {
        self.ids.contains(&NodeId::of(node))
    }

    /// Marks `node` visited. Returns `true` if it was not visited before.
    #[inline]
    pub fn insert<N: Node<'a>>(&mut self, node: &'a N) -> bool {
        self.ids.insert(NodeId::of(node))
    }

    /// Returns the number of visited nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no node has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Forgets every visited node.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl<'a, N: Node<'a>> Visited<&'a N> for VisitedNodes<'a> {
    #[inline]
    fn try_visit(&mut self, node: &'a N) -> bool {
        self.insert(node)
    }

    #[inline]
    fn is_visited(&self, node: &&'a N) -> bool {
        self.contains(*node)
    }

    #[inline]
    fn len(&self) -> usize {
        VisitedNodes::len(self)
    }

    fn clear(&mut self) {
        VisitedNodes::clear(self);
    }
}

/// A visited set of keys borrowed from an adjacency map.
#[derive(Debug)]
pub struct VisitedKeys<'g, T> {
    keys: HashSet<&'g T>,
}

impl<'g, T: Eq + Hash> VisitedKeys<'g, T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }

    /// Returns `true` if `key` has been visited.
    #[inline]
    pub fn contains(&self, key: &T) -> bool {
        self.keys.contains(key)
    }

    /// Iterates the visited keys in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &'g T> + '_ {
        self.keys.iter().copied()
    }
}

impl<T: Eq + Hash> Default for VisitedKeys<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, T: Eq + Hash> Visited<&'g T> for VisitedKeys<'g, T> {
    #[inline]
    fn try_visit(&mut self, key: &'g T) -> bool {
        self.keys.insert(key)
    }

    #[inline]
    fn is_visited(&self, key: &&'g T) -> bool {
        self.keys.contains(*key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn clear(&mut self) {
        self.keys.clear();
    }
}
