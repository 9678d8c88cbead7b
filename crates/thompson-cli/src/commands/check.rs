use thompson_lib::compile::validate;

use super::run_common;

pub struct CheckArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let diagnostics = validate(&args.pattern);

    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            run_common::render_diagnostics(&diagnostics, &args.pattern, args.color)
        );
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
