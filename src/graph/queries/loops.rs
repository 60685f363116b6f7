//! Self-loop detection.

use core::fmt::Display;
use std::io;

use crate::graph::access::visited::{Visited, VisitedNodes};
use crate::graph::basic::{Dfs, Vertex};
use crate::graph::node::Node;

/// Iterator over the values of reachable vertices that list themselves as a
/// neighbor.
///
/// Created by [`self_loopers`] and [`self_loopers_with_visited`].
#[derive(Debug)]
pub struct SelfLoopers<'a, T, V = VisitedNodes<'a>> {
    dfs: Dfs<'a, Vertex<'a, T>, V>,
}

impl<'a, T: 'a, V: Visited<&'a Vertex<'a, T>>> Iterator for SelfLoopers<'a, T, V> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.dfs.find(|v| v.has_self_loop()).map(Vertex::value)
    }
}

/// Returns the values of the vertices reachable from `vertex` whose
/// neighbor list contains the vertex itself.
///
/// Self-reference is decided by identity: a neighbor that merely holds an
/// equal value does not count, nor does a longer cycle back to the vertex.
/// Values come out in depth-first pre-order; a `None` vertex yields nothing.
pub fn self_loopers<'a, T: 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
) -> SelfLoopers<'a, T> {
    SelfLoopers {
        dfs: Dfs::new(vertex),
    }
}

/// Like [`self_loopers`], but continues from a caller-owned visited set.
///
/// Vertices already in `visited` are skipped. Vertices are recorded in
/// `visited` as the iterator advances.
pub fn self_loopers_with_visited<'a, 'v, T: 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
    visited: &'v mut VisitedNodes<'a>,
) -> SelfLoopers<'a, T, &'v mut VisitedNodes<'a>> {
    SelfLoopers {
        dfs: Dfs::with_visited(vertex, visited),
    }
}

/// Writes each value of [`self_loopers`] to `out`, one per line.
///
/// # Errors
/// Returns the first error reported by `out`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn write_self_loopers<'a, T: Display + 'a, W: io::Write + ?Sized>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
    out: &mut W,
) -> io::Result<()> {
    for value in self_loopers(vertex) {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Prints each value of [`self_loopers`] to standard output, one per line.
///
/// # Errors
/// Returns an error if standard output cannot be written.
pub fn print_self_loopers<'a, T: Display + 'a>(
    vertex: impl Into<Option<&'a Vertex<'a, T>>>,
) -> io::Result<()> {
    let stdout = io::stdout();
    write_self_loopers(vertex, &mut stdout.lock())
}
