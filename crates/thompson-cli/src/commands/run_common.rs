//! Pattern compilation and error reporting shared by the commands.

use thompson_lib::{Diagnostics, Error, MatchMode, Regex};

/// Exit code for pattern and I/O errors, distinct from "no match".
pub const EXIT_ERROR: i32 = 2;

/// Label used in place of a file path when rendering pattern diagnostics.
const PATTERN_LABEL: &str = "<pattern>";

pub fn render_diagnostics(diagnostics: &Diagnostics, pattern: &str, color: bool) -> String {
    diagnostics
        .printer(pattern)
        .path(PATTERN_LABEL)
        .colored(color)
        .render()
}

pub fn report_error(err: &Error, pattern: &str, color: bool) {
    match err {
        Error::Syntax(diagnostics) => {
            eprintln!("{}", render_diagnostics(diagnostics, pattern, color));
        }
        Error::Graph(e) => eprintln!("error: {}", e),
    }
}

/// Compile `pattern`, or report why not and exit.
pub fn compile_regex(pattern: &str, mode: MatchMode, color: bool) -> Regex {
    match Regex::builder(pattern).mode(mode).build() {
        Ok(regex) => regex,
        Err(e) => {
            report_error(&e, pattern, color);
            std::process::exit(EXIT_ERROR);
        }
    }
}
