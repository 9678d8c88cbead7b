#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Directed graphs over integer vertex ids and depth-first reachability.
//!
//! Two layers:
//! - **Digraph**: fixed vertex count, append-only adjacency lists
//! - **DirectedDfs**: marks every vertex reachable from one or more sources
//!
//! The automaton compiler in `thompson-lib` stores epsilon transitions in a
//! `Digraph` and computes epsilon closures with `DirectedDfs`.

mod digraph;
mod error;
mod reachability;


pub use digraph::{Digraph, VertexId};
pub use error::GraphError;
pub use reachability::DirectedDfs;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
