//! Directed reachability between nodes, typically airports.

use crate::graph::basic::Dfs;
use crate::graph::node::Node;

/// Returns `true` if `destination` can be reached from `start` by following
/// outgoing edges (for airports: a series of flights).
///
/// A `None` start or destination is never reachable, and this is checked
/// before identity: `can_reach(x, x)` is `true` for any `Some(x)`. The
/// search stops at the first path found and terminates on cyclic networks.
///
/// ```rust
/// use waypoint::{can_reach, Airport};
///
/// let sea = Airport::new("SEA");
/// let den = Airport::new("DEN");
/// let bos = Airport::new("BOS");
/// sea.add_flight(&den);
/// den.add_flight(&sea);
///
/// assert!(can_reach(&sea, &den));
/// assert!(!can_reach(&sea, &bos));
/// assert!(!can_reach(&sea, None));
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, ret))]
pub fn can_reach<'a, N: Node<'a>>(
    start: impl Into<Option<&'a N>>,
    destination: impl Into<Option<&'a N>>,
) -> bool {
    let (Some(start), Some(destination)) = (start.into(), destination.into()) else {
        return false;
    };
    if core::ptr::eq(start, destination) {
        return true;
    }
    Dfs::new(start).any(|node| core::ptr::eq(node, destination))
}
