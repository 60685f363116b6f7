//! Graph layouts and the depth-first queries that run over them.
//!
//! Graph code is organized into categories:
//! - `basic`: the vertex, airport and adjacency-map representations plus the
//!   traversal engines
//! - `queries`: the public, total query functions
//! - `access`: visited-set bookkeeping shared by every traversal

pub mod access;
pub mod basic;
pub mod node;
pub mod queries;

pub use basic::{AdjacencyList, Airport, Dfs, KeyDfs, Vertex};
pub use node::{Node, NodeId};
