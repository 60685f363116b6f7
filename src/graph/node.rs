//! Node identity and the neighbor seam shared by borrowed node graphs.

use core::cell::Ref;
use core::fmt;

/// The identity of a node in a borrowed graph.
///
/// Two nodes are the same node iff they live at the same address. Values are
/// never consulted, so two distinct vertices holding equal values have
/// distinct identities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the identity of `node`.
    #[inline]
    pub fn of<N>(node: &N) -> Self {
        Self(core::ptr::from_ref(node).cast::<()>() as usize)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:#x})", self.0)
    }
}

/// A node whose outgoing edges are borrows of other nodes of the same type.
///
/// This is the seam the depth-first engine ([`Dfs`](crate::Dfs)) walks;
/// [`Vertex`](crate::Vertex) and [`Airport`](crate::Airport) both implement
/// it.
pub trait Node<'a>: 'a {
    /// Returns the outgoing neighbors in their stored order.
    ///
    /// The returned guard must be dropped before the node's neighbor list is
    /// modified.
    fn neighbors(&self) -> Ref<'_, [&'a Self]>;

    /// Returns `true` iff this node lists itself among its neighbors.
    ///
    /// Comparison is by identity.
    fn has_self_loop(&self) -> bool {
        self.neighbors().iter().any(|&n| core::ptr::eq(n, self))
    }
}
