//! Print the compiled automaton.

use thompson_lib::Nfa;

use super::run_common::{self, EXIT_ERROR};

pub struct DumpArgs {
    pub pattern: String,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let nfa = match Nfa::compile(&args.pattern) {
        Ok(nfa) => nfa,
        Err(e) => {
            run_common::report_error(&e, &args.pattern, args.color);
            std::process::exit(EXIT_ERROR);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&nfa) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(EXIT_ERROR);
            }
        }
        return;
    }

    print!("{}", nfa.printer().header(true).colored(args.color).dump());
}
