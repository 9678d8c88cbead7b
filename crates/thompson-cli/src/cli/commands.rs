//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Match, search and trace patterns with a Thompson NFA")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(match_command())
        .subcommand(grep_command())
        .subcommand(dump_command())
        .subcommand(trace_command())
        .subcommand(check_command())
}

/// Match texts against a pattern.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Match texts against a pattern")
        .override_usage("  thompson match <PATTERN> <TEXT>...")
        .after_help(
            r#"EXAMPLES:
  thompson match 'ab*a' aa abba ab    # one report per text
  thompson match '(ab)*' ''           # empty text
  thompson match 'a*' aaab --prefix   # accept on a matching prefix

Exits 0 when every text matched, 1 otherwise."#,
        )
        .arg(pattern_arg())
        .arg(texts_arg())
        .arg(prefix_arg())
        .arg(color_arg())
}

/// Print lines that contain a match.
pub fn grep_command() -> Command {
    Command::new("grep")
        .about("Print lines that contain a match")
        .override_usage(
            "\
  thompson grep <PATTERN> [FILE]
  thompson grep <PATTERN> -",
        )
        .after_help(
            r#"EXAMPLES:
  thompson grep 'ab*c' words.txt      # matching lines
  thompson grep -n 'x|y' words.txt    # with line numbers
  cat words.txt | thompson grep -c a  # count from stdin

Exits 0 when a line matched, 1 when none did, 2 on error."#,
        )
        .arg(pattern_arg())
        .arg(input_arg())
        .arg(line_number_arg())
        .arg(count_arg())
        .arg(color_arg())
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled automaton")
        .override_usage("  thompson dump <PATTERN> [--json]")
        .after_help(
            r#"EXAMPLES:
  thompson dump 'a|b'                 # one line per state
  thompson dump '(ab)*' --json        # vertices and edges as JSON"#,
        )
        .arg(pattern_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Trace the simulation step by step.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace matching one symbol at a time")
        .override_usage("  thompson trace <PATTERN> <TEXT>")
        .after_help(
            r#"EXAMPLES:
  thompson trace 'ab*a' abba          # active states per symbol
  thompson trace 'ab*a' abba -v       # with consuming moves
  thompson trace 'a.c' abc -vv        # with state symbols"#,
        )
        .arg(pattern_arg())
        .arg(text_arg())
        .arg(verbose_arg())
        .arg(prefix_arg())
        .arg(color_arg())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .override_usage("  thompson check <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  thompson check '(a|b)*c'            # silent when valid
  thompson check '(ab'                # reports the unclosed group"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}
