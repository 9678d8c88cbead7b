//! Match texts against a pattern and report each verdict.

use thompson_lib::MatchMode;

use super::run_common;

pub struct MatchArgs {
    pub pattern: String,
    pub texts: Vec<String>,
    pub mode: MatchMode,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    let regex = run_common::compile_regex(&args.pattern, args.mode, args.color);

    let mut all_matched = true;
    for text in &args.texts {
        let matched = regex.matches(text);
        println!("{}", report(regex.as_str(), text, matched));
        all_matched &= matched;
    }

    if !all_matched {
        std::process::exit(1);
    }
}

pub fn report(pattern: &str, text: &str, matched: bool) -> String {
    format!(
        "For regexp: {} and string: {} the result is: {}",
        pattern, text, matched
    )
}
