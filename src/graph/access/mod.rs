//! Traversal bookkeeping shared by the graph queries.
//!
//! Visited sets live here so every traversal expresses its "seen before?"
//! logic in one place, while node graphs and adjacency maps pick the key
//! that identifies a node for them.

pub mod visited;
