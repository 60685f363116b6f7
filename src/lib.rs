//! # `waypoint` - Depth-First Reachability Toolkit
//!
//! Small, total graph queries over structures the caller already owns:
//! reachability-bounded word scans, longest reachable values, self-loop
//! detection, flight reachability and unreachable-key computation.
//!
//! ## Graph Representations
//!
//! 1. **Vertices** ([`Vertex<'a, T>`]):
//!    - A value plus an ordered list of borrowed neighbors
//!    - Cycles and self-loops are built by wiring borrows after construction
//!
//! 2. **Airports** ([`Airport<'a>`]):
//!    - A code plus an insertion-ordered *set* of outbound flights
//!
//! 3. **Adjacency maps** ([`AdjacencyList`]):
//!    - `HashMap<T, Vec<T>>` / `BTreeMap<T, Vec<T>>` keyed by value
//!    - Neighbor values need not be keys themselves
//!
//! ## Traversal Discipline
//!
//! Every query runs one depth-first search with its own visited set:
//! - node graphs are deduplicated by *identity* ([`NodeId`]), never by value
//! - adjacency maps are deduplicated by key
//! - the work stack is explicit, so graph depth is bounded by memory and not
//!   by the thread stack
//!
//! Queries never panic on their inputs. A missing start (`None`), a zero
//! length bound, or an absent key degrade to an empty result, `""` or
//! `false`. Only the `write_*`/`print_*` helpers are fallible, and only
//! through their output sink.
//!
//! ## Example
//!
//! ```rust
//! use waypoint::{longest_word, short_words, Vertex};
//!
//! let a = Vertex::new("fig");
//! let b = Vertex::new("banana");
//! let c = Vertex::new("kiwi");
//! a.connect(&b);
//! b.connect(&c);
//! c.connect(&a);
//!
//! assert_eq!(longest_word(&a), "banana");
//! assert_eq!(short_words(&a, 5).collect::<Vec<_>>(), vec!["fig", "kiwi"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod graph;

pub use graph::access::visited::{Visited, VisitedKeys, VisitedNodes};
pub use graph::basic::{AdjacencyList, Airport, Dfs, KeyDfs, Vertex};
pub use graph::node::{Node, NodeId};
pub use graph::queries::{
    can_reach, longest_word, longest_word_with_visited, print_self_loopers, print_short_words,
    reachable, self_loopers, self_loopers_with_visited, short_words, unreachable,
    write_self_loopers, write_short_words,
};

// Compile-time layout checks
const _: () = {
    use core::mem;

    // Identities are plain addresses.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());

    // A vertex is its value plus one `RefCell<Vec<_>>` of thin borrows.
    assert!(
        mem::size_of::<Vertex<'static, ()>>()
            == mem::size_of::<core::cell::RefCell<Vec<&'static Vertex<'static, ()>>>>()
    );
};
