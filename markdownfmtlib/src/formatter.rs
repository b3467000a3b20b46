//! Per-document formatting.
//!
//! [`Formatter::format_source`] is the unit of work for a run: read one
//! document, normalize it, and produce whatever the configured
//! [`FormatOptions`] ask for.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::diff::DiffEngine;
use crate::error::MarkdownfmtError;
use crate::normalize::Normalize;
use crate::options::FormatOptions;
use crate::source::{Input, Source};
use crate::status::ExitStatus;
use crate::Result;

/// Prefix naming the formatted side in diff headers.
const DIFF_LABEL: &str = "markdownfmt";

/// What happened to one successfully processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileOutcome {
    /// Formatting differs from the original
    pub changed: bool,
    /// A diff was written for this document
    pub diff_reported: bool,
}

impl FileOutcome {
    /// Contribution of this document to the run's exit status.
    pub fn status(&self) -> ExitStatus {
        if self.diff_reported {
            ExitStatus::DiffsFound
        } else {
            ExitStatus::Success
        }
    }
}

/// Formats documents with a fixed set of modes and capabilities.
pub struct Formatter<'a> {
    options: FormatOptions,
    normalizer: &'a dyn Normalize,
    differ: &'a dyn DiffEngine,
}

impl<'a> Formatter<'a> {
    pub fn new(
        options: FormatOptions,
        normalizer: &'a dyn Normalize,
        differ: &'a dyn DiffEngine,
    ) -> Self {
        Self {
            options,
            normalizer,
            differ,
        }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Format one document, writing any output to `out`.
    ///
    /// When the formatted bytes differ from the original:
    /// - list mode writes the document name on its own line
    /// - write mode overwrites the source file
    /// - diff mode writes a `diff <name> markdownfmt/<name>` header and the diff body
    ///
    /// Independently of any change, the formatted bytes are written to `out`
    /// when no mode is set. Output already written before a failure stays written.
    pub fn format_source(&self, source: Source<'_>, out: &mut dyn Write) -> Result<FileOutcome> {
        let name = source.name().to_string();
        tracing::info!(file = %name, "formatting");

        let path = source.path().map(Path::to_path_buf);
        let src = read_input(&name, source.into_input())?;
        let res = self.normalizer.normalize(&name, &src)?;

        let mut outcome = FileOutcome::default();
        if src != res {
            outcome.changed = true;

            if self.options.list {
                writeln!(out, "{name}").map_err(MarkdownfmtError::Output)?;
            }
            if self.options.write {
                let path = path.ok_or_else(|| MarkdownfmtError::NotWritable(name.clone()))?;
                std::fs::write(&path, &res)
                    .map_err(|source| MarkdownfmtError::FileWrite { path, source })?;
            }
            if self.options.diff {
                let data = self.differ.unified_diff(&src, &res)?;
                writeln!(out, "diff {name} {DIFF_LABEL}/{name}")
                    .and_then(|()| out.write_all(&data))
                    .map_err(MarkdownfmtError::Output)?;
                outcome.diff_reported = true;
            }
        }

        if self.options.prints_default() {
            out.write_all(&res).map_err(MarkdownfmtError::Output)?;
        }

        Ok(outcome)
    }
}

fn read_input(name: &str, input: Input<'_>) -> Result<Vec<u8>> {
    let file_error = |source| MarkdownfmtError::FileRead {
        name: name.to_string(),
        source,
    };

    let mut src = Vec::new();
    match input {
        Input::File(path) => {
            let mut file = File::open(&path).map_err(file_error)?;
            file.read_to_end(&mut src).map_err(file_error)?;
        }
        Input::Reader(reader) => {
            reader
                .read_to_end(&mut src)
                .map_err(|source| MarkdownfmtError::StreamRead {
                    name: name.to_string(),
                    source,
                })?;
        }
    }
    Ok(src)
}
