#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Thompson NFA compiler and simulator for a small regular-expression language.
//!
//! The language has literals, `.` (any symbol), grouping with `(` `)`,
//! alternation with `|` and Kleene star `*`. A pattern compiles into an
//! epsilon-transition digraph with one vertex per pattern position; matching
//! walks the text one symbol at a time, keeping the epsilon closure of every
//! state that is still possible.
//!
//! - `compile` - syntax validation and graph construction
//! - `engine` - simulation, match modes, tracing
//! - `diagnostics` - pattern error reporting
//! - `grep` - line-by-line search built on `Regex`

pub mod colors;
pub mod compile;
pub mod diagnostics;
pub mod engine;
pub mod grep;

pub use colors::Colors;
pub use compile::Nfa;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use engine::{MatchMode, NoopTracer, PrintTracer, Regex, RegexBuilder, Tracer, Verbosity};
pub use grep::{LineMatch, LineMatcher, MatchingLines};

pub use thompson_graph::{Digraph, DirectedDfs, GraphError, VertexId};

/// Errors that can occur while compiling or running a pattern.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("pattern is malformed ({})", error_summary(.0))]
    Syntax(Diagnostics),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, Error>;

fn error_summary(diagnostics: &Diagnostics) -> String {
    match diagnostics.error_count() {
        1 => "1 error".to_string(),
        n => format!("{} errors", n),
    }
}
