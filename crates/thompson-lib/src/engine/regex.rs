//! Compiled pattern plus match configuration.

use std::fmt;

use thompson_graph::DirectedDfs;

use super::trace::{NoopTracer, Tracer};
use crate::Result;
use crate::compile::Nfa;

/// When a text counts as matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole text is consumed and the accepting state is active at the end.
    #[default]
    Full,
    /// The accepting state becomes active right after some input symbol is
    /// consumed. Trailing input is never examined; an empty text never matches.
    Prefix,
}

/// Builder for `Regex`.
#[derive(Clone, Debug)]
pub struct RegexBuilder<'p> {
    pattern: &'p str,
    mode: MatchMode,
}

impl<'p> RegexBuilder<'p> {
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            mode: MatchMode::default(),
        }
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compile the pattern.
    pub fn build(self) -> Result<Regex> {
        let nfa = Nfa::compile(self.pattern)?;
        Ok(Regex {
            nfa,
            mode: self.mode,
        })
    }
}

/// A compiled pattern, reusable across any number of texts.
#[derive(Clone, Debug)]
pub struct Regex {
    nfa: Nfa,
    mode: MatchMode,
}

impl Regex {
    /// Compile `pattern` with full-text matching.
    pub fn new(pattern: &str) -> Result<Self> {
        RegexBuilder::new(pattern).build()
    }

    pub fn builder(pattern: &str) -> RegexBuilder<'_> {
        RegexBuilder::new(pattern)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        self.nfa.pattern()
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether `text` matches. Texts that do not match are `false`, never an error.
    pub fn matches(&self, text: &str) -> bool {
        self.try_matches(text).unwrap_or(false)
    }

    /// Like `matches`, surfacing graph errors instead of treating them as a miss.
    ///
    /// Uses `NoopTracer`, which compiles away entirely.
    pub fn try_matches(&self, text: &str) -> Result<bool> {
        self.matches_with(text, &mut NoopTracer)
    }

    /// Run the simulation with a tracer attached.
    pub fn matches_with<T: Tracer>(&self, text: &str, tracer: &mut T) -> Result<bool> {
        let nfa = &self.nfa;
        let accept = nfa.accept();
        let prefix = self.mode == MatchMode::Prefix;

        let mut active = DirectedDfs::new(nfa.graph());
        active.from_source(nfa.start())?;
        tracer.trace_start(text, &active);

        let mut candidates = Vec::new();
        let mut consumed = 0;
        for symbol in text.chars() {
            consumed += 1;

            candidates.clear();
            candidates.extend(
                active
                    .reachable()
                    .filter(|&v| nfa.consumes(v, symbol))
                    .map(|v| v + 1),
            );
            tracer.trace_symbol(consumed, symbol, &candidates);

            if candidates.is_empty() {
                tracer.trace_dead_end(consumed, symbol);
                tracer.trace_reject(consumed);
                return Ok(false);
            }

            // Marks never carry over from the previous symbol.
            let mut next = DirectedDfs::new(nfa.graph());
            next.from_sources(&candidates)?;
            active = next;
            tracer.trace_closure(&active);

            if prefix && active.is_reachable(accept)? {
                tracer.trace_accept(consumed);
                return Ok(true);
            }
        }

        // Prefix mode accepts only after consuming a symbol, never at the end.
        let matched = !prefix && active.is_reachable(accept)?;
        if matched {
            tracer.trace_accept(consumed);
        } else {
            tracer.trace_reject(consumed);
        }
        Ok(matched)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
