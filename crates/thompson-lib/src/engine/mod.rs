//! Pattern matching by state-set simulation.
//!
//! Each input symbol turns the current active-state set into candidate
//! successors, and a fresh depth-first pass computes their epsilon closure.

mod regex;
mod trace;

#[cfg(test)]
mod trace_tests;

pub use regex::{MatchMode, Regex, RegexBuilder};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
