use thompson_lib::Regex;

use super::matches::report;

#[test]
fn report_line() {
    insta::assert_snapshot!(
        report("ab*a", "abba", true),
        @"For regexp: ab*a and string: abba the result is: true"
    );
}

#[test]
fn report_empty_text() {
    let regex = Regex::new("(ab)*").unwrap();

    let line = report(regex.as_str(), "", regex.matches(""));

    insta::assert_snapshot!(line, @"For regexp: (ab)* and string:  the result is: true");
}
