//! Reachable and unreachable key sets of adjacency maps.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::access::visited::VisitedKeys;
use crate::graph::basic::{AdjacencyList, KeyDfs};

fn visit_all<'g, 's, T, G>(
    graph: &'g G,
    starting: impl Into<Option<&'s T>>,
) -> VisitedKeys<'g, T>
where
    T: Eq + Hash + 's,
    G: AdjacencyList<T> + ?Sized,
{
    let mut dfs = KeyDfs::new(graph, starting);
    for _ in dfs.by_ref() {}
    let visited = dfs.into_visited();
    debug_event!(
        reached = crate::Visited::len(&visited),
        keys = graph.key_count(),
        "adjacency traversal finished"
    );
    visited
}

/// Returns the keys of `graph` that can be reached from `starting`,
/// `starting` included.
///
/// Neighbor values that are not keys of `graph` are skipped. A `None` or
/// absent start reaches nothing.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn reachable<'s, T, G>(graph: &G, starting: impl Into<Option<&'s T>>) -> HashSet<T>
where
    T: Eq + Hash + Clone + 's,
    G: AdjacencyList<T> + ?Sized,
{
    visit_all(graph, starting).iter().cloned().collect()
}

/// Returns the keys of `graph` that cannot be reached from `starting`.
///
/// This is the key set minus [`reachable`]: a `None` or absent start leaves
/// every key unreachable, and a graph whose keys are all reachable yields an
/// empty set. Neighbor values that are not keys of `graph` never appear in
/// the result.
///
/// ```rust
/// use std::collections::{HashMap, HashSet};
/// use waypoint::unreachable;
///
/// let graph = HashMap::from([
///     ("a", vec!["b"]),
///     ("b", vec!["a", "ghost"]),
///     ("c", vec!["a"]),
/// ]);
///
/// assert_eq!(unreachable(&graph, &"a"), HashSet::from(["c"]));
/// assert_eq!(unreachable(&graph, &"c"), HashSet::new());
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn unreachable<'s, T, G>(graph: &G, starting: impl Into<Option<&'s T>>) -> HashSet<T>
where
    T: Eq + Hash + Clone + 's,
    G: AdjacencyList<T> + ?Sized,
{
    let visited = visit_all(graph, starting);
    graph
        .keys()
        .filter(|&key| !visited.contains(key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_partition_of_keys() {
        let graph: HashMap<u8, Vec<u8>> = HashMap::from([
            (1, vec![2]),
            (2, vec![3, 7]),
            (3, vec![1]),
            (4, vec![5]),
            (5, vec![]),
        ]);

        let reached = reachable(&graph, &1);
        let missed = unreachable(&graph, &1);
        assert_eq!(reached, HashSet::from([1, 2, 3]));
        assert_eq!(missed, HashSet::from([4, 5]));
        assert!(reached.is_disjoint(&missed));
    }

    #[test]
    fn test_btree_map_graph() {
        let graph: BTreeMap<&str, Vec<&str>> =
            BTreeMap::from([("x", vec!["y"]), ("y", vec![]), ("z", vec!["x"])]);
        assert_eq!(unreachable(&graph, &"x"), HashSet::from(["z"]));
    }
}
