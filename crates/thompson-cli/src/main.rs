mod cli;
mod commands;

use cli::{CheckParams, DumpParams, GrepParams, MatchParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matches::run(params.into());
        }
        Some(("grep", m)) => {
            let params = GrepParams::from_matches(m);
            commands::grep::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
