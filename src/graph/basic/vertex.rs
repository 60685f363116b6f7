//! A borrowed vertex graph.
//!
//! Vertices do not own each other. Each vertex stores its value and an
//! ordered list of `&'a Vertex<'a, T>` borrows, wired after construction, so
//! cycles and self-loops can be built from vertices that live in locals, a
//! `Vec`, or an arena:
//!
//! ```rust
//! use waypoint::Vertex;
//!
//! let a = Vertex::new("a");
//! let b = Vertex::new("b");
//! a.connect(&b);
//! b.connect(&a);
//! b.connect(&b);
//!
//! assert_eq!(a.degree(), 1);
//! assert_eq!(b.degree(), 2);
//! ```

use core::cell::{Ref, RefCell};
use core::fmt;

use crate::graph::node::Node;

/// A graph vertex holding a value and borrowed neighbor references.
///
/// Neighbor order is insertion order and duplicates are kept. The neighbor
/// list sits behind a `RefCell`, so wiring only needs `&self`; the type is
/// therefore `!Sync`.
pub struct Vertex<'a, T> {
    value: T,
    neighbors: RefCell<Vec<&'a Vertex<'a, T>>>,
}

impl<'a, T> Vertex<'a, T> {
    /// Creates a vertex with no neighbors.
    pub fn new(value: T) -> Self {
        Self {
            value,
            neighbors: RefCell::new(Vec::new()),
        }
    }

    /// Returns the vertex's value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the vertex and returns its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Appends `neighbor` to this vertex's neighbor list.
    ///
    /// `neighbor` may be `self` (a self-loop) and may already be present.
    ///
    /// # Panics
    /// Panics if the neighbor list is currently borrowed through
    /// [`Vertex::neighbors`].
    pub fn connect(&self, neighbor: &'a Vertex<'a, T>) {
        self.neighbors.borrow_mut().push(neighbor);
    }

    /// Removes every occurrence of `neighbor` (by identity).
    ///
    /// Returns `true` if anything was removed.
    ///
    /// # Panics
    /// Panics if the neighbor list is currently borrowed through
    /// [`Vertex::neighbors`].
    pub fn disconnect(&self, neighbor: &Vertex<'a, T>) -> bool {
        let mut nbrs = self.neighbors.borrow_mut();
        let before = nbrs.len();
        nbrs.retain(|&v| !core::ptr::eq(v, neighbor));
        before != nbrs.len()
    }

    /// Returns the neighbors in insertion order.
    pub fn neighbors(&self) -> Ref<'_, [&'a Vertex<'a, T>]> {
        Ref::map(self.neighbors.borrow(), Vec::as_slice)
    }

    /// Returns the number of neighbor entries, duplicates included.
    pub fn degree(&self) -> usize {
        self.neighbors.borrow().len()
    }
}

impl<'a, T: 'a> Node<'a> for Vertex<'a, T> {
    #[inline]
    fn neighbors(&self) -> Ref<'_, [&'a Self]> {
        Vertex::neighbors(self)
    }
}

// Neighbors are summarized rather than followed: the graph may be cyclic.
impl<T: fmt::Debug> fmt::Debug for Vertex<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("value", &self.value)
            .field("degree", &self.degree())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_basic() {
        let a = Vertex::new(1);
        let b = Vertex::new(2);
        let c = Vertex::new(3);

        a.connect(&b);
        a.connect(&c);
        a.connect(&b);

        let values: Vec<_> = a.neighbors().iter().map(|v| *v.value()).collect();
        assert_eq!(values, vec![2, 3, 2]);
        assert_eq!(a.degree(), 3);
        assert_eq!(b.degree(), 0);
    }

    #[test]
    fn test_disconnect_by_identity() {
        let a = Vertex::new("x");
        let b = Vertex::new("x");
        let c = Vertex::new("x");

        a.connect(&b);
        a.connect(&c);
        a.connect(&b);

        // `c` has the same value as `b` but is a different vertex.
        assert!(a.disconnect(&b));
        assert_eq!(a.degree(), 1);
        assert!(core::ptr::eq(a.neighbors()[0], &c));
        assert!(!a.disconnect(&b));
    }

    #[test]
    fn test_vertices_in_vec() {
        let vs: Vec<Vertex<usize>> = (0..4).map(Vertex::new).collect();
        for w in vs.windows(2) {
            w[0].connect(&w[1]);
        }
        vs[3].connect(&vs[0]);

        assert!(vs.iter().all(|v| v.degree() == 1));
        assert_eq!(*vs[3].neighbors()[0].value(), 0);
    }

    #[test]
    fn test_debug_does_not_follow_cycles() {
        let a = Vertex::new("a");
        a.connect(&a);
        assert_eq!(format!("{a:?}"), r#"Vertex { value: "a", degree: 1 }"#);
    }
}
