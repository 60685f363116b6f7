//! Depth-first traversal engines.
//!
//! Both engines are iterators over an explicit stack, so traversal depth is
//! bounded by memory rather than by the thread stack:
//! - [`Dfs`] walks borrowed node graphs ([`Node`]) and deduplicates by
//!   identity
//! - [`KeyDfs`] walks value-keyed adjacency maps ([`AdjacencyList`]) and
//!   deduplicates by key
//!
//! Both yield nodes in the same pre-order a recursive traversal would:
//! a node is yielded when it is first entered, and its neighbors are entered
//! in neighbor-list order.

use core::fmt;
use std::hash::Hash;

use crate::graph::access::visited::{Visited, VisitedKeys, VisitedNodes};
use crate::graph::basic::adjacency_map::AdjacencyList;
use crate::graph::node::Node;
#[cfg(feature = "tracing")]
use crate::graph::node::NodeId;

/// An iterator for Depth-First Search (DFS) over a borrowed node graph.
///
/// Yields every node reachable from the start exactly once, in pre-order.
/// Nodes already recorded in the visited set are neither yielded nor
/// expanded.
pub struct Dfs<'a, N, V = VisitedNodes<'a>> {
    stack: Vec<&'a N>,
    visited: V,
}

impl<'a, N: Node<'a>> Dfs<'a, N> {
    /// Creates a DFS starting at `start` with a fresh visited set.
    ///
    /// A `None` start yields nothing.
    pub fn new(start: impl Into<Option<&'a N>>) -> Self {
        Self::with_visited(start, VisitedNodes::new())
    }
}

impl<'a, N: Node<'a>, V: Visited<&'a N>> Dfs<'a, N, V> {
    /// Creates a DFS starting at `start` that continues from `visited`.
    ///
    /// Pass `&mut VisitedNodes<'a>` to keep the visited set after the
    /// traversal.
    pub fn with_visited(start: impl Into<Option<&'a N>>, visited: V) -> Self {
        Self {
            stack: start.into().into_iter().collect(),
            visited,
        }
    }

    /// Returns the visited set as it stands.
    pub fn visited(&self) -> &V {
        &self.visited
    }

    /// Consumes the iterator and returns its visited set.
    pub fn into_visited(self) -> V {
        self.visited
    }
}

impl<'a, N: Node<'a>, V: Visited<&'a N>> Iterator for Dfs<'a, N, V> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { stack, visited } = self;
        while let Some(node) = stack.pop() {
            if !visited.try_visit(node) {
                continue;
            }
            trace_event!(node = ?NodeId::of(node), depth = stack.len(), "dfs enter");

            // Reverse push so the first neighbor is entered first.
            let nbrs = node.neighbors();
            stack.extend(
                nbrs.iter()
                    .rev()
                    .copied()
                    .filter(|n| !visited.is_visited(n)),
            );
            return Some(node);
        }
        None
    }
}

impl<N, V: fmt::Debug> fmt::Debug for Dfs<'_, N, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfs")
            .field("pending", &self.stack.len())
            .field("visited", &self.visited)
            .finish()
    }
}

/// An iterator for Depth-First Search (DFS) over an adjacency map.
///
/// Yields every key reachable from the start exactly once, in pre-order,
/// borrowed from the graph. Neighbor values that are not keys of the graph
/// are skipped.
pub struct KeyDfs<'g, T, G: ?Sized> {
    graph: &'g G,
    stack: Vec<(&'g T, &'g [T])>,
    visited: VisitedKeys<'g, T>,
}

impl<'g, T: Eq + Hash, G: AdjacencyList<T> + ?Sized> KeyDfs<'g, T, G> {
    /// Creates a DFS over `graph` starting at `start`.
    ///
    /// A `None` start, or one that is not a key of `graph`, yields nothing.
    pub fn new<'s>(graph: &'g G, start: impl Into<Option<&'s T>>) -> Self
    where
        T: 's,
    {
        Self {
            graph,
            stack: start.into().and_then(|s| graph.lookup(s)).into_iter().collect(),
            visited: VisitedKeys::new(),
        }
    }

    /// Returns the keys visited so far.
    pub fn visited(&self) -> &VisitedKeys<'g, T> {
        &self.visited
    }

    /// Consumes the iterator and returns its visited keys.
    pub fn into_visited(self) -> VisitedKeys<'g, T> {
        self.visited
    }
}

impl<'g, T: Eq + Hash, G: AdjacencyList<T> + ?Sized> Iterator for KeyDfs<'g, T, G> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, nbrs)) = self.stack.pop() {
            if !self.visited.try_visit(key) {
                continue;
            }
            trace_event!(depth = self.stack.len(), out_degree = nbrs.len(), "key dfs enter");

            for nbr in nbrs.iter().rev() {
                if self.visited.contains(nbr) {
                    continue;
                }
                if let Some(entry) = self.graph.lookup(nbr) {
                    self.stack.push(entry);
                }
            }
            return Some(key);
        }
        None
    }
}

impl<T, G: ?Sized> fmt::Debug for KeyDfs<'_, T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDfs")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Airport, Vertex};
    use std::collections::HashMap;

    #[test]
    fn test_dfs_preorder_follows_neighbor_order() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> 0
        let vs: Vec<Vertex<usize>> = (0..4).map(Vertex::new).collect();
        vs[0].connect(&vs[1]);
        vs[0].connect(&vs[2]);
        vs[1].connect(&vs[3]);
        vs[2].connect(&vs[3]);
        vs[3].connect(&vs[0]);

        let order: Vec<_> = Dfs::new(&vs[0]).map(|v| *v.value()).collect();
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_dfs_none_start() {
        let mut dfs = Dfs::<Vertex<u8>>::new(None);
        assert!(dfs.next().is_none());
        assert!(dfs.visited().is_empty());
    }

    #[test]
    fn test_dfs_with_visited_skips_and_records() {
        let a = Vertex::new('a');
        let b = Vertex::new('b');
        let c = Vertex::new('c');
        a.connect(&b);
        b.connect(&c);

        let mut visited = VisitedNodes::new();
        visited.insert(&b);

        let seen: Vec<_> = Dfs::with_visited(&a, &mut visited).map(|v| *v.value()).collect();
        assert_eq!(seen, vec!['a']);
        assert!(visited.contains(&a));
        assert!(!visited.contains(&c));
    }

    #[test]
    fn test_dfs_over_airports() {
        let sea = Airport::new("SEA");
        let den = Airport::new("DEN");
        let atl = Airport::new("ATL");
        sea.add_flight(&den);
        den.add_flight(&atl);
        atl.add_flight(&sea);

        let codes: Vec<_> = Dfs::new(&sea).map(Airport::code).collect();
        assert_eq!(codes, vec!["SEA", "DEN", "ATL"]);
    }

    #[test]
    fn test_dfs_deep_chain() {
        let n = 100_000;
        let vs: Vec<Vertex<usize>> = (0..n).map(Vertex::new).collect();
        for w in vs.windows(2) {
            w[0].connect(&w[1]);
        }
        assert_eq!(Dfs::new(&vs[0]).count(), n);
    }

    #[test]
    fn test_key_dfs_skips_dangling() {
        let graph: HashMap<u32, Vec<u32>> =
            HashMap::from([(1, vec![2, 99, 3]), (2, vec![1]), (3, vec![]), (4, vec![1])]);

        let order: Vec<_> = KeyDfs::new(&graph, &1).copied().collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_key_dfs_absent_start() {
        let graph: HashMap<u32, Vec<u32>> = HashMap::from([(1, vec![2])]);
        assert_eq!(KeyDfs::new(&graph, &2).count(), 0);
        assert_eq!(KeyDfs::new(&graph, None).count(), 0);
    }
}
