use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// What went wrong in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// `)` with no open group.
    UnmatchedClose,
    /// `(` never closed before the end of the pattern.
    UnclosedGroup,
    /// `*` at the start of the pattern, a group or a branch.
    NothingToRepeat,
}

impl DiagnosticKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            DiagnosticKind::UnmatchedClose => "unmatched `)`",
            DiagnosticKind::UnclosedGroup => "unclosed group",
            DiagnosticKind::NothingToRepeat => "`*` has nothing to repeat",
        }
    }
}

/// Secondary location attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    pub range: Range<usize>,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub range: Range<usize>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            message: kind.default_message().to_string(),
            related: Vec::new(),
        }
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.range.start, self.range.end, self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.range.start, related.range.end
            )?;
        }
        Ok(())
    }
}
