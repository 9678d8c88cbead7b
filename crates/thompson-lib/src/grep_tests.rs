use std::fs::File;
use std::io::{BufReader, Cursor, Write};

use indoc::indoc;

use super::*;

const WORDS: &str = indoc! {"
    apple
    banana

    cherry
    grape\r
    pineapple
"};

fn matching(pattern: &str, input: &str) -> Vec<(usize, String)> {
    let matcher = LineMatcher::new(pattern).unwrap();
    matcher
        .search(Cursor::new(input))
        .map(|m| {
            let m = m.unwrap();
            (m.number, m.line)
        })
        .collect()
}

#[test]
fn lines_containing_pattern() {
    let found = matching("app", WORDS);

    assert_eq!(
        found,
        vec![(1, "apple".to_string()), (6, "pineapple".to_string())]
    );
}

#[test]
fn crlf_terminators_are_stripped() {
    let found = matching("e", "grape\r\n");
    assert_eq!(found, vec![(1, "grape".to_string())]);

    let found = matching("ape", WORDS);
    assert_eq!(found, vec![(5, "grape".to_string())]);
}

#[test]
fn alternation_stays_inside_search() {
    let found = matching("ch|gr", WORDS);

    assert_eq!(found, vec![(4, "cherry".to_string()), (5, "grape".to_string())]);
}

#[test]
fn star_and_wildcard() {
    let found = matching("b(an)*a", WORDS);
    assert_eq!(found, vec![(2, "banana".to_string())]);

    let found = matching("e.r", WORDS);
    assert_eq!(found, vec![(4, "cherry".to_string())]);

    let found = matching("x.y", WORDS);
    assert!(found.is_empty());
}

#[test]
fn empty_lines_never_match() {
    let matcher = LineMatcher::new("").unwrap();

    assert!(!matcher.is_match(""));
    assert!(matcher.is_match("x"));
    assert_eq!(matcher.search(Cursor::new(WORDS)).count(), 5);
}

#[test]
fn diagnostics_point_into_user_pattern() {
    let err = LineMatcher::new("a)").unwrap_err();

    let Error::Syntax(diagnostics) = err else {
        panic!("expected syntax error");
    };
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 1..2: unmatched `)`");
}

#[test]
fn accessors() {
    let matcher = LineMatcher::new("a|b").unwrap();

    assert_eq!(matcher.pattern(), "a|b");
    assert_eq!(matcher.regex().as_str(), ".*(a|b).*");
}

#[test]
fn searches_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", WORDS).unwrap();

    let reader = BufReader::new(File::open(file.path()).unwrap());
    let matcher = LineMatcher::new("rr").unwrap();
    let found: Vec<_> = matcher.search(reader).map(|m| m.unwrap()).collect();

    assert_eq!(
        found,
        vec![LineMatch {
            number: 4,
            line: "cherry".to_string()
        }]
    );
}

#[test]
fn read_errors_propagate() {
    let matcher = LineMatcher::new("a").unwrap();
    let input: &[u8] = b"\xff\xfe\n";

    let first = matcher.search(Cursor::new(input)).next().unwrap();

    assert_eq!(first.unwrap_err().kind(), std::io::ErrorKind::InvalidData);
}
