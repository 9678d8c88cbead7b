//! Syntax checks that run before any graph is built.
//!
//! Construction pairs every `)` with a pending `(` and every `*` with an
//! operand. Patterns that break either rule are reported here with byte
//! ranges into the pattern as written.

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Check `pattern` for unbalanced groups and stars with nothing to repeat.
pub fn validate(pattern: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let mut open_groups: Vec<usize> = Vec::new();
    let mut prev: Option<char> = None;

    for (offset, c) in pattern.char_indices() {
        let range = offset..offset + c.len_utf8();
        match c {
            '(' => open_groups.push(offset),
            ')' => {
                if open_groups.pop().is_none() {
                    diagnostics
                        .report(DiagnosticKind::UnmatchedClose, range)
                        .emit();
                }
            }
            '*' if matches!(prev, None | Some('(') | Some('|')) => {
                diagnostics
                    .report(DiagnosticKind::NothingToRepeat, range)
                    .emit();
            }
            _ => {}
        }
        prev = Some(c);
    }

    for offset in open_groups {
        let mut report = diagnostics
            .report(DiagnosticKind::UnclosedGroup, offset..offset + 1)
            .message("unclosed group, expected `)` before end of pattern");
        if offset + 1 < pattern.len() {
            report = report.related_to("group contents", offset + 1..pattern.len());
        }
        report.emit();
    }

    diagnostics
}
