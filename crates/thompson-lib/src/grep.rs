//! Line-by-line search: print every line that contains a match.

use std::io::{self, BufRead};

use crate::compile::validate;
use crate::engine::Regex;
use crate::{Error, Result};

/// A line that contained a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number.
    pub number: usize,
    /// Line text without its terminator.
    pub line: String,
}

/// Matches lines containing a pattern anywhere in them.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    pattern: String,
    regex: Regex,
}

impl LineMatcher {
    /// Build a matcher for lines containing `pattern`.
    ///
    /// Diagnostics point into `pattern`, not the wrapped search pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let diagnostics = validate(pattern);
        if !diagnostics.is_empty() {
            return Err(Error::Syntax(diagnostics));
        }

        // The inner group keeps a top-level `|` inside the search.
        let regex = Regex::new(&format!(".*({}).*", pattern))?;
        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as given to `new`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The wrapped pattern used for matching.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether `line` contains a match. Empty lines never match.
    pub fn is_match(&self, line: &str) -> bool {
        !line.is_empty() && self.regex.matches(line)
    }

    /// Iterate over matching lines of `reader`.
    pub fn search<R: BufRead>(&self, reader: R) -> MatchingLines<'_, R> {
        MatchingLines {
            matcher: self,
            lines: reader.lines(),
            number: 0,
        }
    }
}

/// Iterator over the matching lines of a reader.
///
/// Read errors are yielded as they occur; iteration may continue past them.
pub struct MatchingLines<'m, R> {
    matcher: &'m LineMatcher,
    lines: io::Lines<R>,
    number: usize,
}

impl<R: BufRead> Iterator for MatchingLines<'_, R> {
    type Item = io::Result<LineMatch>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.number += 1;

            if self.matcher.is_match(&line) {
                return Some(Ok(LineMatch {
                    number: self.number,
                    line,
                }));
            }
        }
    }
}

#[cfg(test)]
#[path = "grep_tests.rs"]
mod grep_tests;
