//! Trace matching one input symbol at a time.

use thompson_lib::{MatchMode, PrintTracer, Verbosity};

use super::run_common::{self, EXIT_ERROR};

pub struct TraceArgs {
    pub pattern: String,
    pub text: String,
    pub verbosity: Verbosity,
    pub mode: MatchMode,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let regex = run_common::compile_regex(&args.pattern, args.mode, args.color);
    let mut tracer = PrintTracer::builder(regex.nfa())
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();

    let result = regex.matches_with(&args.text, &mut tracer);
    tracer.print();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
