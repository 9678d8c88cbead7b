//! Depth-first reachability over a `Digraph`.
//!
//! A `DirectedDfs` owns one mark array sized to the graph. Traversal calls
//! only ever add marks, so a caller that wants an independent answer builds
//! a new instance. Marking uses an explicit work stack; pattern length never
//! turns into call depth.

use crate::Result;
use crate::digraph::{Digraph, VertexId};
use crate::error::GraphError;

/// Vertices reachable from a set of sources.
#[derive(Debug, Clone)]
pub struct DirectedDfs<'g> {
    graph: &'g Digraph,
    marked: Vec<bool>,
    stack: Vec<VertexId>,
}

impl<'g> DirectedDfs<'g> {
    /// Bind to `graph` with nothing marked.
    pub fn new(graph: &'g Digraph) -> Self {
        Self {
            graph,
            marked: vec![false; graph.vertex_count()],
            stack: Vec::new(),
        }
    }

    /// Mark every vertex reachable from `source`, including `source`.
    pub fn from_source(&mut self, source: VertexId) -> Result<()> {
        GraphError::check_vertex(source, self.marked.len())?;
        self.mark_from(source);
        Ok(())
    }

    /// Mark every vertex reachable from any of `sources`.
    ///
    /// All sources are validated before marking starts. A source already
    /// marked by an earlier one is skipped.
    pub fn from_sources(&mut self, sources: &[VertexId]) -> Result<()> {
        if sources.is_empty() {
            return Err(GraphError::InvalidArgument(
                "source list must contain at least one vertex".to_string(),
            ));
        }
        for &s in sources {
            GraphError::check_vertex(s, self.marked.len())?;
        }
        for &s in sources {
            if !self.marked[s] {
                self.mark_from(s);
            }
        }
        Ok(())
    }

    /// Whether `v` was marked by a traversal on this instance.
    pub fn is_reachable(&self, v: VertexId) -> Result<bool> {
        GraphError::check_vertex(v, self.marked.len())?;
        Ok(self.marked[v])
    }

    /// Marked vertices in ascending order.
    pub fn reachable(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| m.then_some(v))
    }

    /// Number of marked vertices.
    pub fn count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    fn mark_from(&mut self, source: VertexId) {
        let graph = self.graph;
        self.marked[source] = true;
        self.stack.push(source);

        while let Some(v) = self.stack.pop() {
            for &w in graph.successors(v) {
                if !self.marked[w] {
                    self.marked[w] = true;
                    self.stack.push(w);
                }
            }
        }
    }
}
