use super::*;

#[test]
fn well_formed_patterns() {
    for pattern in ["", "abc", "a|b", "(a|b)*c", "((a)(b|c))*", "a**", "(a|)", ".*"] {
        let diagnostics = validate(pattern);
        assert!(diagnostics.is_empty(), "{pattern}: {diagnostics}");
    }
}

#[test]
fn unmatched_close() {
    insta::assert_snapshot!(validate("ab)c").to_string(), @"error at 2..3: unmatched `)`");
}

#[test]
fn unclosed_group_points_at_open() {
    insta::assert_snapshot!(
        validate("a(b(c)").to_string(),
        @"error at 1..2: unclosed group, expected `)` before end of pattern (related: group contents at 2..6)"
    );
}

#[test]
fn close_before_open() {
    insta::assert_snapshot!(validate(")(").to_string(), @r"
    error at 0..1: unmatched `)`
    error at 1..2: unclosed group, expected `)` before end of pattern
    ");
}

#[test]
fn star_with_nothing_to_repeat() {
    insta::assert_snapshot!(validate("*a|(*b)|*").to_string(), @r"
    error at 0..1: `*` has nothing to repeat
    error at 4..5: `*` has nothing to repeat
    error at 8..9: `*` has nothing to repeat
    ");
}

#[test]
fn ranges_are_byte_offsets() {
    let diagnostics = validate("é)");

    let range = diagnostics.iter().next().map(|d| d.range.clone());
    assert_eq!(range, Some(2..3));
}
