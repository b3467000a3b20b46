//! # markdownfmt
//!
//! Formats Markdown documents.
//!
//! ## Overview
//!
//! markdownfmt is built on top of markdownfmtlib. Without flags it prints the
//! formatted version of each document; with flags it lists, rewrites or diffs
//! the documents whose formatting would change.
//!
//! ## Usage
//!
//! ```bash
//! # Format standard input
//! markdownfmt < README.md
//!
//! # List files whose formatting differs
//! markdownfmt -l docs/
//!
//! # Rewrite files in place
//! markdownfmt -w README.md docs/
//!
//! # Show diffs (exit status 1 when something would change)
//! markdownfmt -d .
//! ```
//!
//! Exit status is 0 on success, 1 when `-d` found changes, and 2 when any
//! error was reported.

mod logging;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use markdownfmtlib::{run, ExternalDiff, FormatOptions, Formatter, MarkdownNormalizer};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("markdownfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Formats Markdown documents")
        .override_usage("markdownfmt [flags] [path ...]")
        .arg(
            Arg::new("path")
                .action(ArgAction::Append)
                .num_args(1..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Files or directories to format (defaults to standard input)"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .action(ArgAction::SetTrue)
                .help("List files whose formatting differs from markdownfmt's"),
        )
        .arg(
            Arg::new("write")
                .short('w')
                .action(ArgAction::SetTrue)
                .help("Write result to (source) file instead of stdout"),
        )
        .arg(
            Arg::new("diff")
                .short('d')
                .action(ArgAction::SetTrue)
                .help("Display diffs instead of rewriting files"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log files before processing"),
        )
}

/// Extract output modes from matches
fn extract_options(matches: &ArgMatches) -> FormatOptions {
    FormatOptions::new()
        .list(matches.get_flag("list"))
        .write(matches.get_flag("write"))
        .diff(matches.get_flag("diff"))
}

/// Extract paths from matches
fn extract_paths(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("path")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    if let Err(e) = logging::init(matches.get_flag("verbose")) {
        eprintln!("Error: {e:#}");
        return ExitCode::from(2);
    }

    let normalizer = MarkdownNormalizer::new();
    let differ = ExternalDiff::new();
    let formatter = Formatter::new(extract_options(&matches), &normalizer, &differ);
    let paths = extract_paths(&matches);

    let status = run(
        &formatter,
        &paths,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    );

    ExitCode::from(status.code())
}
