//! Dump helpers for automaton inspection and testing.

use std::fmt::Write;

use thompson_graph::VertexId;

use super::nfa::Nfa;
use crate::colors::Colors;

/// Printer for `Nfa`: one line per vertex with its symbol and epsilon successors.
///
/// ```text
/// N0: '(' → N1, N3
/// N1: 'a' → ∅
/// N2: '|' → N4
/// N3: 'b' → ∅
/// N4: ')' → N5
/// N5: ✓
/// ```
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
    header: bool,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
            header: false,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Prefix the dump with vertex and edge counts.
    pub fn header(mut self, enabled: bool) -> Self {
        self.header = enabled;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;
        let graph = self.nfa.graph();

        if self.header {
            writeln!(
                w,
                "{}{} vertices, {} edges{}",
                c.dim,
                graph.vertex_count(),
                graph.edge_count(),
                c.reset
            )?;
        }

        for v in 0..graph.vertex_count() {
            write!(w, "N{}: ", v)?;
            match self.nfa.symbol(v) {
                Some(symbol) => {
                    write!(w, "{}{:?}{}", c.blue, symbol, c.reset)?;
                    self.format_successors(w, v)?;
                }
                None => write!(w, "{}✓{}", c.green, c.reset)?,
            }
            writeln!(w)?;
        }

        Ok(())
    }

    fn format_successors(&self, w: &mut String, v: VertexId) -> std::fmt::Result {
        let successors = self
            .nfa
            .graph()
            .adjacent(v)
            .map_err(|_| std::fmt::Error)?;

        if successors.is_empty() {
            return write!(w, " → ∅");
        }

        let succs: Vec<_> = successors.iter().map(|s| format!("N{}", s)).collect();
        write!(w, " → {}", succs.join(", "))
    }
}

impl Nfa {
    /// Create a printer for this automaton.
    pub fn printer(&self) -> NfaPrinter<'_> {
        NfaPrinter::new(self)
    }

    /// Dump in default format.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
