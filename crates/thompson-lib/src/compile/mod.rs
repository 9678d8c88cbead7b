//! Pattern compilation: syntax validation, then Thompson construction.
//!
//! The pattern is wrapped in one extra group, `(` + pattern + `)`, and every
//! character of the wrapped text becomes a vertex. One more vertex past the
//! end is the accepting state. Edges are epsilon transitions only; symbol
//! transitions are implicit (a literal at position `i` consumes into `i + 1`).

mod compiler;
mod dump;
mod nfa;
mod validate;

#[cfg(test)]
mod validate_tests;

pub use compiler::Compiler;
pub use dump::NfaPrinter;
pub use nfa::{Nfa, is_meta};
pub use validate::validate;
