//! Basic graph representations and the traversal engines over them.
//!
//! This module contains the three graph shapes the queries accept and the
//! depth-first iterators that walk them.

pub mod adjacency_map;
pub mod airport;
pub mod algorithms;
pub mod vertex;

pub use adjacency_map::AdjacencyList;
pub use airport::Airport;
pub use algorithms::{Dfs, KeyDfs};
pub use vertex::Vertex;
