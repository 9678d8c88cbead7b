//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but keep the raw CLI choices
//! (color mode, verbosity count, prefix flag). The `From` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;
use thompson_lib::{MatchMode, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::grep::GrepArgs;
use crate::commands::matches::MatchArgs;
use crate::commands::trace::TraceArgs;

pub struct MatchParams {
    pub pattern: String,
    pub texts: Vec<String>,
    pub prefix: bool,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            texts: m
                .get_many::<String>("texts")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            prefix: m.get_flag("prefix"),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            texts: p.texts,
            mode: match_mode(p.prefix),
            color: p.color.should_colorize(),
        }
    }
}

pub struct GrepParams {
    pub pattern: String,
    pub input: Option<PathBuf>,
    pub line_number: bool,
    pub count: bool,
    pub color: ColorChoice,
}

impl GrepParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        // `-` and a missing file both mean stdin.
        let input = m
            .get_one::<PathBuf>("input")
            .filter(|path| path.as_os_str() != "-")
            .cloned();

        Self {
            pattern: parse_pattern(m),
            input,
            line_number: m.get_flag("line_number"),
            count: m.get_flag("count"),
            color: parse_color(m),
        }
    }
}

impl From<GrepParams> for GrepArgs {
    fn from(p: GrepParams) -> Self {
        Self {
            pattern: p.pattern,
            input: p.input,
            line_number: p.line_number,
            count: p.count,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub json: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub text: String,
    pub verbose: u8,
    pub prefix: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            text: m.get_one::<String>("text").cloned().unwrap_or_default(),
            verbose: m.get_count("verbose"),
            prefix: m.get_flag("prefix"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            pattern: p.pattern,
            text: p.text,
            verbosity,
            mode: match_mode(p.prefix),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn match_mode(prefix: bool) -> MatchMode {
    if prefix {
        MatchMode::Prefix
    } else {
        MatchMode::Full
    }
}
