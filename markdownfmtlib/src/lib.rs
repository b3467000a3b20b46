//! # markdownfmtlib
//!
//! The engine behind the `markdownfmt` command: find Markdown documents,
//! normalize them, and report what would change.
//!
//! ## Overview
//!
//! A run takes a list of paths (or standard input) and, for every eligible
//! document, compares the original bytes with their normalized rendering.
//! What happens next depends on the [`FormatOptions`]:
//!
//! - **Print** (no mode set): write the normalized document to the output
//! - **List**: write the name of each document whose formatting differs
//! - **Write**: overwrite each changed document in place
//! - **Diff**: write a unified diff for each changed document
//!
//! Errors are local to one document. They are reported as they happen and the
//! batch carries on; the final [`ExitStatus`] is the most severe outcome seen.
//!
//! ## Features
//!
//! - **Directory walks**: depth-first, pruning `.git`, `.github`, `vendor`,
//!   `node_modules` and `third_party`
//! - **Pluggable capabilities**: the normalizer and the diff program sit
//!   behind the [`Normalize`] and [`DiffEngine`] traits
//! - **Built-in normalizer**: [`MarkdownNormalizer`] canonicalizes headings,
//!   list markers and whitespace
//!
//! ## Example
//!
//! ```rust
//! use markdownfmtlib::{run, ExitStatus, ExternalDiff, FormatOptions, Formatter, MarkdownNormalizer};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let doc = dir.path().join("README.md");
//! fs::write(&doc, "# Title\n\n*  item\n").unwrap();
//!
//! let normalizer = MarkdownNormalizer::new();
//! let differ = ExternalDiff::new();
//! let formatter = Formatter::new(FormatOptions::new().list(true), &normalizer, &differ);
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let status = run(&formatter, &[dir.path()], &mut std::io::empty(), &mut out, &mut err);
//!
//! assert_eq!(status, ExitStatus::Success);
//! assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", doc.display()));
//! ```

pub mod diff;
pub mod error;
pub mod formatter;
pub mod markdown;
pub mod normalize;
pub mod options;
pub mod run;
pub mod source;
pub mod status;

pub use diff::{DiffEngine, DiffError, ExternalDiff};
pub use error::MarkdownfmtError;
pub use formatter::{FileOutcome, Formatter};
pub use markdown::MarkdownNormalizer;
pub use normalize::Normalize;
pub use options::FormatOptions;
pub use run::run;
pub use source::{markdown_files, Source, STDIN_NAME};
pub use status::ExitStatus;

/// Result type for markdownfmtlib operations
pub type Result<T> = std::result::Result<T, MarkdownfmtError>;
