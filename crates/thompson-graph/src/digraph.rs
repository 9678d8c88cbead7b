//! Adjacency-list digraph with a fixed vertex count.
//!
//! Vertices are `0..vertex_count`. Edges are only ever added; successor
//! lists keep insertion order and may hold duplicates and self-loops.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::Result;
use crate::error::GraphError;

/// Index of a vertex in a `Digraph`.
pub type VertexId = usize;

/// Directed graph over `0..vertex_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the directed edge `from → to`.
    ///
    /// Both endpoints are checked before the graph is touched.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        GraphError::check_vertex(from, self.vertex_count())?;
        GraphError::check_vertex(to, self.vertex_count())?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Successors of `v` in insertion order.
    pub fn adjacent(&self, v: VertexId) -> Result<&[VertexId]> {
        GraphError::check_vertex(v, self.vertex_count())?;
        Ok(&self.adjacency[v])
    }

    /// Iterate over all edges, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(v, succs)| succs.iter().map(move |&w| (v, w)))
    }

    /// Human-readable summary: counts, then one adjacency line per vertex.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Unchecked successor access for traversal code that already holds a
    /// validated vertex.
    pub(crate) fn successors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;
        for (v, succs) in self.adjacency.iter().enumerate() {
            let succs: Vec<_> = succs.iter().map(|w| w.to_string()).collect();
            if succs.is_empty() {
                writeln!(f, "{}:", v)?;
            } else {
                writeln!(f, "{}: {}", v, succs.join(", "))?;
            }
        }
        Ok(())
    }
}

impl Serialize for Digraph {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let edges: Vec<[VertexId; 2]> = self.edges().map(|(v, w)| [v, w]).collect();
        let mut state = s.serialize_struct("Digraph", 2)?;
        state.serialize_field("vertex_count", &self.vertex_count())?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}
