//! The compiled automaton.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thompson_graph::{Digraph, VertexId};

/// True for characters that steer the graph instead of consuming input.
pub fn is_meta(c: char) -> bool {
    matches!(c, '(' | ')' | '|' | '*')
}

/// Epsilon-transition automaton for one pattern.
///
/// Vertex `v < accept()` stands for position `v` of the wrapped pattern.
/// Immutable once built; many texts can be matched against one `Nfa`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pattern: String,
    symbols: Vec<char>,
    graph: Digraph,
}

impl Nfa {
    pub(crate) fn new(pattern: &str, symbols: Vec<char>, graph: Digraph) -> Self {
        debug_assert_eq!(graph.vertex_count(), symbols.len() + 1);
        Self {
            pattern: pattern.to_owned(),
            symbols,
            graph,
        }
    }

    /// Compile `pattern`.
    pub fn compile(pattern: &str) -> crate::Result<Self> {
        super::Compiler::compile(pattern)
    }

    /// The pattern as written, without the outer group.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The wrapped pattern, one entry per non-accepting vertex.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Epsilon transitions.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn start(&self) -> VertexId {
        0
    }

    pub fn accept(&self) -> VertexId {
        self.symbols.len()
    }

    /// Pattern character at `v`; `None` for the accepting vertex.
    pub fn symbol(&self, v: VertexId) -> Option<char> {
        self.symbols.get(v).copied()
    }

    /// Whether the state at `v` consumes `input`, moving to `v + 1`.
    pub fn consumes(&self, v: VertexId, input: char) -> bool {
        match self.symbol(v) {
            Some('.') => true,
            Some(c) => !is_meta(c) && c == input,
            None => false,
        }
    }
}

impl Serialize for Nfa {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let wrapped: String = self.symbols.iter().collect();
        let mut state = s.serialize_struct("Nfa", 4)?;
        state.serialize_field("pattern", &self.pattern)?;
        state.serialize_field("wrapped", &wrapped)?;
        state.serialize_field("accept", &self.accept())?;
        state.serialize_field("graph", &self.graph)?;
        state.end()
    }
}
