//! Print lines of a file (or stdin) that contain a match.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use thompson_lib::{Colors, LineMatch, LineMatcher};

use super::run_common::{self, EXIT_ERROR};

pub struct GrepArgs {
    /// Pattern to search for; lines match when they contain it.
    pub pattern: String,
    /// File to read; `None` reads stdin.
    pub input: Option<PathBuf>,
    pub line_number: bool,
    pub count: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GrepError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

pub fn run(args: GrepArgs) {
    let matcher = match LineMatcher::new(&args.pattern) {
        Ok(matcher) => matcher,
        Err(e) => {
            run_common::report_error(&e, &args.pattern, args.color);
            std::process::exit(EXIT_ERROR);
        }
    };

    let stdout = io::stdout();
    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => search(&matcher, BufReader::new(file), &args, &mut stdout.lock()),
            Err(source) => Err(GrepError::Open {
                path: path.display().to_string(),
                source,
            }),
        },
        None => search(&matcher, io::stdin().lock(), &args, &mut stdout.lock()),
    };

    match result {
        Ok(0) => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Write matching lines (or their count) to `out`; return the number of matches.
pub fn search<R: BufRead, W: Write>(
    matcher: &LineMatcher,
    reader: R,
    args: &GrepArgs,
    out: &mut W,
) -> Result<usize, GrepError> {
    let colors = Colors::new(args.color);
    let mut count = 0;

    for found in matcher.search(reader) {
        let found = found.map_err(|source| GrepError::Read {
            path: input_label(args),
            source,
        })?;
        count += 1;

        if !args.count {
            writeln!(out, "{}", format_line(&found, args.line_number, colors))
                .map_err(GrepError::Write)?;
        }
    }

    if args.count {
        writeln!(out, "{}", count).map_err(GrepError::Write)?;
    }
    Ok(count)
}

pub fn format_line(found: &LineMatch, line_number: bool, colors: Colors) -> String {
    if !line_number {
        return found.line.clone();
    }
    format!(
        "{}{}{}:{}",
        colors.green, found.number, colors.reset, found.line
    )
}

fn input_label(args: &GrepArgs) -> String {
    match &args.input {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}
