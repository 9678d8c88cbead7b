//! Thompson construction over pattern positions.

use std::iter;

use thompson_graph::{Digraph, GraphError, VertexId};

use super::nfa::Nfa;
use super::validate::validate;
use crate::{Error, Result};

/// Entry on the construction stack: a group or bar waiting for its `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open(VertexId),
    Bar(VertexId),
}

/// Compiler state for one pattern.
pub struct Compiler {
    symbols: Vec<char>,
    graph: Digraph,
    pending: Vec<Pending>,
    /// `(open, close)` of the most recently closed group.
    last_group: Option<(VertexId, VertexId)>,
}

impl Compiler {
    fn new(symbols: Vec<char>) -> Self {
        let graph = Digraph::new(symbols.len() + 1);
        Self {
            symbols,
            graph,
            pending: Vec::new(),
            last_group: None,
        }
    }

    /// Validate and compile `pattern` into an `Nfa`.
    pub fn compile(pattern: &str) -> Result<Nfa> {
        let diagnostics = validate(pattern);
        if !diagnostics.is_empty() {
            return Err(Error::Syntax(diagnostics));
        }

        let symbols: Vec<char> = iter::once('(')
            .chain(pattern.chars())
            .chain(iter::once(')'))
            .collect();

        let mut compiler = Compiler::new(symbols);
        for position in 0..compiler.symbols.len() {
            compiler.compile_position(position)?;
        }

        debug_assert!(compiler.pending.is_empty());
        Ok(Nfa::new(pattern, compiler.symbols, compiler.graph))
    }

    fn compile_position(&mut self, i: VertexId) -> std::result::Result<(), GraphError> {
        match self.symbols[i] {
            '(' => {
                self.graph.add_edge(i, i + 1)?;
                self.pending.push(Pending::Open(i));
            }
            '|' => self.pending.push(Pending::Bar(i)),
            ')' => {
                self.graph.add_edge(i, i + 1)?;
                self.close_group(i)?;
            }
            '*' => {
                // Zero occurrences, then the repeat loop with the operand.
                self.graph.add_edge(i, i + 1)?;
                let operand = self.star_operand(i);
                self.graph.add_edge(operand, i)?;
                self.graph.add_edge(i, operand)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Pop bars back to the matching `(` and wire each alternative.
    ///
    /// For a bar at `b`: the group start may skip to `b + 1` (next branch),
    /// and the branch ending at `b` jumps to `close`.
    fn close_group(&mut self, close: VertexId) -> std::result::Result<(), GraphError> {
        let mut bars = Vec::new();
        let open = loop {
            match self.pending.pop() {
                Some(Pending::Bar(bar)) => bars.push(bar),
                Some(Pending::Open(open)) => break open,
                None => unreachable!("group balance is checked before construction"),
            }
        };

        for bar in bars {
            self.graph.add_edge(open, bar + 1)?;
            self.graph.add_edge(bar, close)?;
        }
        self.last_group = Some((open, close));
        Ok(())
    }

    /// A `*` repeats the group that just closed, or the single position before it.
    fn star_operand(&self, star: VertexId) -> VertexId {
        match self.last_group {
            Some((open, close)) if close + 1 == star => open,
            _ => star - 1,
        }
    }
}
