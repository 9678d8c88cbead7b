//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Subcommand wiring: every command parses its own flags
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion: raw choices resolve into command args

use std::path::PathBuf;

use thompson_lib::{MatchMode, Verbosity};

use super::*;
use crate::cli::commands::{
    check_command, dump_command, grep_command, match_command, trace_command,
};
use crate::commands::grep::GrepArgs;
use crate::commands::matches::MatchArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn match_takes_many_texts() {
    let m = match_command()
        .try_get_matches_from(["match", "ab*a", "aa", "abba", ""])
        .unwrap();

    let params = MatchParams::from_matches(&m);

    assert_eq!(params.pattern, "ab*a");
    assert_eq!(params.texts, vec!["aa", "abba", ""]);
    assert!(!params.prefix);
}

#[test]
fn match_requires_a_text() {
    let result = match_command().try_get_matches_from(["match", "ab*a"]);

    assert!(result.is_err());
}

#[test]
fn match_prefix_flag_selects_mode() {
    let m = match_command()
        .try_get_matches_from(["match", "a*", "aaab", "--prefix", "--color", "never"])
        .unwrap();

    let args: MatchArgs = MatchParams::from_matches(&m).into();

    assert_eq!(args.mode, MatchMode::Prefix);
    assert!(!args.color);
}

#[test]
fn match_defaults_to_full_mode() {
    let m = match_command()
        .try_get_matches_from(["match", "a*", "aaab"])
        .unwrap();

    let args: MatchArgs = MatchParams::from_matches(&m).into();

    assert_eq!(args.mode, MatchMode::Full);
}

#[test]
fn grep_reads_file() {
    let m = grep_command()
        .try_get_matches_from(["grep", "-n", "x|y", "words.txt"])
        .unwrap();

    let params = GrepParams::from_matches(&m);

    assert_eq!(params.pattern, "x|y");
    assert_eq!(params.input, Some(PathBuf::from("words.txt")));
    assert!(params.line_number);
    assert!(!params.count);
}

#[test]
fn grep_dash_means_stdin() {
    let m = grep_command()
        .try_get_matches_from(["grep", "a", "-", "-c"])
        .unwrap();

    let args: GrepArgs = GrepParams::from_matches(&m).into();

    assert_eq!(args.input, None);
    assert!(args.count);
}

#[test]
fn grep_without_file_means_stdin() {
    let m = grep_command().try_get_matches_from(["grep", "a"]).unwrap();

    let params = GrepParams::from_matches(&m);

    assert_eq!(params.input, None);
}

#[test]
fn dump_json_flag() {
    let m = dump_command()
        .try_get_matches_from(["dump", "(ab)*", "--json"])
        .unwrap();

    let params = DumpParams::from_matches(&m);

    assert_eq!(params.pattern, "(ab)*");
    assert!(params.json);
}

#[test]
fn trace_verbosity_levels() {
    let cases = [
        (vec!["trace", "a", "a"], Verbosity::Default),
        (vec!["trace", "a", "a", "-v"], Verbosity::Verbose),
        (vec!["trace", "a", "a", "-vv"], Verbosity::VeryVerbose),
        (vec!["trace", "a", "a", "-vvv"], Verbosity::VeryVerbose),
    ];

    for (argv, expected) in cases {
        let m = trace_command().try_get_matches_from(&argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected, "{argv:?}");
    }
}

#[test]
fn trace_takes_exactly_one_text() {
    let result = trace_command().try_get_matches_from(["trace", "a", "a", "b"]);

    assert!(result.is_err());
}

#[test]
fn check_color_choice() {
    let m = check_command()
        .try_get_matches_from(["check", "(a", "--color", "always"])
        .unwrap();

    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern, "(a");
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn color_rejects_unknown_value() {
    let result = check_command().try_get_matches_from(["check", "a", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn color_defaults_to_auto() {
    let m = dump_command().try_get_matches_from(["dump", "a"]).unwrap();

    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Auto);
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["thompson"]);

    assert!(result.is_err());
}

#[test]
fn cli_routes_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["thompson", "check", "a|b"])
        .unwrap();

    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "check");
    assert_eq!(CheckParams::from_matches(sub).pattern, "a|b");
}
