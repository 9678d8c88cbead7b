//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern to compile (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern: literals, '.', '(' ')', '|' and '*'")
}

/// One or more texts to match (positional).
pub fn texts_arg() -> Arg {
    Arg::new("texts")
        .value_name("TEXT")
        .required(true)
        .num_args(1..)
        .help("Texts to match against the pattern")
}

/// A single text to trace (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .required(true)
        .help("Text to match against the pattern")
}

/// File to search (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File to search (stdin if omitted or '-')")
}

/// Early-accept matching (--prefix).
pub fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .long("prefix")
        .action(ArgAction::SetTrue)
        .help("Accept as soon as some prefix of the text matches")
}

/// Prefix lines with their number (-n/--line-number).
pub fn line_number_arg() -> Arg {
    Arg::new("line_number")
        .short('n')
        .long("line-number")
        .action(ArgAction::SetTrue)
        .help("Prefix each matching line with its line number")
}

/// Print the number of matching lines only (-c/--count).
pub fn count_arg() -> Arg {
    Arg::new("count")
        .short('c')
        .long("count")
        .action(ArgAction::SetTrue)
        .help("Print only the number of matching lines")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the automaton as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
