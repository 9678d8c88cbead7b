//! Tracing hooks for the simulation loop.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty bodies, so untraced
//! matching pays nothing for the hooks. `PrintTracer` keeps its own display
//! state (the pending symbol and its candidates) rather than pushing it into
//! the simulation.

use thompson_graph::{DirectedDfs, VertexId};

use crate::Colors;
use crate::compile::Nfa;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Active-state set after every symbol.
    #[default]
    Default,
    /// Adds a sub-line with the consuming transitions of each step.
    Verbose,
    /// Also labels every state with its pattern symbol.
    VeryVerbose,
}

/// Simulation instrumentation.
///
/// Hooks fire in this order for one match:
/// - `trace_start` - initial closure computed
/// - `trace_symbol` - candidates for one input symbol collected
/// - `trace_dead_end` - no candidates, the match stops here
/// - `trace_closure` - closure of the candidates computed
/// - `trace_accept` / `trace_reject` - final verdict
pub trait Tracer {
    /// Called once the closure of the start state is known.
    fn trace_start(&mut self, text: &str, active: &DirectedDfs<'_>);

    /// Called after collecting the states that consume `symbol`.
    /// `candidates` holds their successors.
    fn trace_symbol(&mut self, step: usize, symbol: char, candidates: &[VertexId]);

    /// Called when no active state consumes `symbol`.
    fn trace_dead_end(&mut self, step: usize, symbol: char);

    /// Called with the new active-state set.
    fn trace_closure(&mut self, active: &DirectedDfs<'_>);

    /// Called when the match succeeds after `consumed` symbols.
    fn trace_accept(&mut self, consumed: usize);

    /// Called when the match fails after `consumed` symbols.
    fn trace_reject(&mut self, consumed: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _text: &str, _active: &DirectedDfs<'_>) {}

    #[inline(always)]
    fn trace_symbol(&mut self, _step: usize, _symbol: char, _candidates: &[VertexId]) {}

    #[inline(always)]
    fn trace_dead_end(&mut self, _step: usize, _symbol: char) {}

    #[inline(always)]
    fn trace_closure(&mut self, _active: &DirectedDfs<'_>) {}

    #[inline(always)]
    fn trace_accept(&mut self, _consumed: usize) {}

    #[inline(always)]
    fn trace_reject(&mut self, _consumed: usize) {}
}

/// Builder for `PrintTracer`.
pub struct PrintTracerBuilder<'n> {
    nfa: &'n Nfa,
    verbosity: Verbosity,
    colors: Colors,
}

impl<'n> PrintTracerBuilder<'n> {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn build(self) -> PrintTracer<'n> {
        PrintTracer {
            nfa: self.nfa,
            verbosity: self.verbosity,
            colors: self.colors,
            lines: Vec::new(),
            step_width: 1,
            pending: None,
        }
    }
}

/// Tracer that collects a readable simulation log.
///
/// ```text
/// start: N0 N1 N3
/// 1 'a': N2 N4 N5✓
/// ✓ matched (1 consumed)
/// ```
pub struct PrintTracer<'n> {
    /// Automaton being traced, for symbol labels.
    nfa: &'n Nfa,
    verbosity: Verbosity,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Width of the step column, from the text length.
    step_width: usize,
    /// Step, symbol and candidates waiting for their closure.
    pending: Option<(usize, char, Vec<VertexId>)>,
    colors: Colors,
}

impl<'n> PrintTracer<'n> {
    pub fn new(nfa: &'n Nfa) -> Self {
        Self::builder(nfa).build()
    }

    pub fn builder(nfa: &'n Nfa) -> PrintTracerBuilder<'n> {
        PrintTracerBuilder {
            nfa,
            verbosity: Verbosity::Default,
            colors: Colors::OFF,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn format_step(&self, step: usize, symbol: char) -> String {
        let c = self.colors;
        format!(
            "{:>sw$} {}{:?}{}:",
            step,
            c.blue,
            symbol,
            c.reset,
            sw = self.step_width
        )
    }

    fn format_state(&self, v: VertexId) -> String {
        let c = self.colors;
        if v == self.nfa.accept() {
            return format!("N{}{}✓{}", v, c.green, c.reset);
        }
        match self.nfa.symbol(v) {
            Some(symbol) if self.verbosity == Verbosity::VeryVerbose => {
                format!("N{}{}{:?}{}", v, c.blue, symbol, c.reset)
            }
            _ => format!("N{}", v),
        }
    }

    fn format_set(&self, active: &DirectedDfs<'_>) -> String {
        let states: Vec<_> = active.reachable().map(|v| self.format_state(v)).collect();
        states.join(" ")
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_start(&mut self, text: &str, active: &DirectedDfs<'_>) {
        self.step_width = text.chars().count().max(1).to_string().len();
        let line = format!("start: {}", self.format_set(active));
        self.lines.push(line);
    }

    fn trace_symbol(&mut self, step: usize, symbol: char, candidates: &[VertexId]) {
        self.pending = Some((step, symbol, candidates.to_vec()));
    }

    fn trace_dead_end(&mut self, step: usize, symbol: char) {
        self.pending = None;
        let c = self.colors;
        let line = format!("{} {}✗{}", self.format_step(step, symbol), c.dim, c.reset);
        self.lines.push(line);
    }

    fn trace_closure(&mut self, active: &DirectedDfs<'_>) {
        let Some((step, symbol, candidates)) = self.pending.take() else {
            return;
        };
        let line = format!("{} {}", self.format_step(step, symbol), self.format_set(active));
        self.lines.push(line);

        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        let moves: Vec<_> = candidates
            .iter()
            .map(|&w| format!("N{}→N{}", w - 1, w))
            .collect();
        let indent = self.step_width + 1;
        self.lines.push(format!(
            "{:indent$}{}via {}{}",
            "",
            c.dim,
            moves.join(", "),
            c.reset
        ));
    }

    fn trace_accept(&mut self, consumed: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{}✓ matched{} ({} consumed)", c.green, c.reset, consumed));
    }

    fn trace_reject(&mut self, consumed: usize) {
        let c = self.colors;
        self.lines
            .push(format!("{}✗ no match{} ({} consumed)", c.dim, c.reset, consumed));
    }
}
