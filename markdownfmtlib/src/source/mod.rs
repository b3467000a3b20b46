//! Source discovery: find documents to format.
//!
//! This module handles the first stage of a run - deciding what to read.
//! It provides:
//!
//! - **Classification**: which directories are pruned and which files are Markdown
//! - **Walking**: lazy, depth-first enumeration of a directory tree
//! - **Sources**: a named file or an already-open stream, ready for the formatter
//!
//! ## Example
//!
//! ```rust,ignore
//! use markdownfmtlib::source::{markdown_files, Source};
//!
//! for path in markdown_files("docs") {
//!     let source = Source::file(path?);
//! }
//! ```

pub mod filter;
pub mod walk;

use std::io::Read;
use std::path::{Path, PathBuf};

pub use filter::{is_markdown_file, should_skip_dir, MARKDOWN_SUFFIXES, SKIPPED_DIRS};
pub use walk::{markdown_files, MarkdownFiles};

/// Identifier used for documents read from standard input.
pub const STDIN_NAME: &str = "<standard input>";

/// Where a document's bytes come from.
pub enum Input<'a> {
    /// Open and read the named file
    File(PathBuf),
    /// Read this stream to completion
    Reader(&'a mut dyn Read),
}

/// One unit of work: a display name plus the origin of its bytes.
pub struct Source<'a> {
    name: String,
    input: Input<'a>,
}

impl<'a> Source<'a> {
    /// A document backed by a file on disk.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.to_string_lossy().into_owned(),
            input: Input::File(path),
        }
    }

    /// A document read from standard input.
    pub fn stdin(reader: &'a mut dyn Read) -> Self {
        Self::reader(STDIN_NAME, reader)
    }

    /// A document read from an arbitrary stream under the given name.
    pub fn reader(name: impl Into<String>, reader: &'a mut dyn Read) -> Self {
        Self {
            name: name.into(),
            input: Input::Reader(reader),
        }
    }

    /// Human-readable identifier: the path, or [`STDIN_NAME`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match &self.input {
            Input::File(path) => Some(path),
            Input::Reader(_) => None,
        }
    }

    pub(crate) fn into_input(self) -> Input<'a> {
        self.input
    }
}
