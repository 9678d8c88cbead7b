//! Trace output tests.

use super::*;

fn trace(regex: &Regex, text: &str, verbosity: Verbosity) -> String {
    let mut tracer = PrintTracer::builder(regex.nfa())
        .verbosity(verbosity)
        .build();
    let matched = regex.matches_with(text, &mut tracer).unwrap();
    assert_eq!(matched, regex.matches(text));
    tracer.dump()
}

#[test]
fn accepted_alternative() {
    let re = Regex::new("a|b").unwrap();

    insta::assert_snapshot!(trace(&re, "a", Verbosity::Default), @r"
    start: N0 N1 N3
    1 'a': N2 N4 N5✓
    ✓ matched (1 consumed)
    ");
}

#[test]
fn dead_end() {
    let re = Regex::new("a|b").unwrap();

    insta::assert_snapshot!(trace(&re, "c", Verbosity::Default), @r"
    start: N0 N1 N3
    1 'c': ✗
    ✗ no match (1 consumed)
    ");
}

#[test]
fn verbose_shows_consuming_moves() {
    let re = Regex::new("ab*a").unwrap();

    insta::assert_snapshot!(trace(&re, "abba", Verbosity::Verbose), @r"
    start: N0 N1
    1 'a': N2 N3 N4
      via N1→N2
    2 'b': N2 N3 N4
      via N2→N3
    3 'b': N2 N3 N4
      via N2→N3
    4 'a': N5 N6✓
      via N4→N5
    ✓ matched (4 consumed)
    ");
}

#[test]
fn very_verbose_labels_states() {
    let re = Regex::new("a.c").unwrap();

    insta::assert_snapshot!(trace(&re, "abc", Verbosity::VeryVerbose), @r"
    start: N0'(' N1'a'
    1 'a': N2'.'
      via N1→N2
    2 'b': N3'c'
      via N2→N3
    3 'c': N4')' N5✓
      via N3→N4
    ✓ matched (3 consumed)
    ");
}

#[test]
fn full_mode_rejects_trailing_input() {
    let re = Regex::new("a*").unwrap();

    insta::assert_snapshot!(trace(&re, "aaab", Verbosity::Default), @r"
    start: N0 N1 N2 N3 N4✓
    1 'a': N1 N2 N3 N4✓
    2 'a': N1 N2 N3 N4✓
    3 'a': N1 N2 N3 N4✓
    4 'b': ✗
    ✗ no match (4 consumed)
    ");
}

#[test]
fn prefix_mode_accepts_after_first_symbol() {
    let re = Regex::builder("a*")
        .mode(MatchMode::Prefix)
        .build()
        .unwrap();

    insta::assert_snapshot!(trace(&re, "aaab", Verbosity::Default), @r"
    start: N0 N1 N2 N3 N4✓
    1 'a': N1 N2 N3 N4✓
    ✓ matched (1 consumed)
    ");
}

#[test]
fn prefix_mode_dead_end_on_first_symbol() {
    let re = Regex::builder("a*")
        .mode(MatchMode::Prefix)
        .build()
        .unwrap();

    insta::assert_snapshot!(trace(&re, "b", Verbosity::Default), @r"
    start: N0 N1 N2 N3 N4✓
    1 'b': ✗
    ✗ no match (1 consumed)
    ");
}

#[test]
fn empty_text() {
    let re = Regex::new("(ab)*").unwrap();

    insta::assert_snapshot!(trace(&re, "", Verbosity::Default), @r"
    start: N0 N1 N2 N5 N6 N7✓
    ✓ matched (0 consumed)
    ");
}

#[test]
fn step_column_fits_text_length() {
    let re = Regex::new("a*").unwrap();
    let mut tracer = PrintTracer::new(re.nfa());

    re.matches_with("aaaaaaaaaa", &mut tracer).unwrap();

    let lines = tracer.lines();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[1], " 1 'a': N1 N2 N3 N4✓");
    assert_eq!(lines[10], "10 'a': N1 N2 N3 N4✓");
}

#[test]
fn colored_output_uses_ansi() {
    let re = Regex::new("a").unwrap();
    let mut plain = PrintTracer::new(re.nfa());
    let mut colored = PrintTracer::builder(re.nfa()).colored(true).build();

    re.matches_with("a", &mut plain).unwrap();
    re.matches_with("a", &mut colored).unwrap();

    assert!(!plain.dump().contains('\x1b'));
    assert!(colored.dump().contains("\x1b[32m✓ matched\x1b[0m"));
}
