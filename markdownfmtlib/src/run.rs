//! Batch entry point.
//!
//! [`run`] resolves each path to a file or a directory, formats everything it
//! finds, and folds every per-document result into one [`ExitStatus`].
//! Errors are written to the diagnostics sink as they happen and never stop
//! the batch.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::MarkdownfmtError;
use crate::formatter::Formatter;
use crate::source::{markdown_files, Source};
use crate::status::ExitStatus;

/// Format `paths`, or standard input when `paths` is empty.
///
/// - Directories are walked; only eligible Markdown documents are formatted.
/// - Files named explicitly are always formatted, whatever their name.
/// - Paths that cannot be stat'ed are reported and skipped.
///
/// Formatted output goes to `out`, diagnostics to `err`. The returned status
/// is the most severe outcome seen across the whole batch.
pub fn run<P: AsRef<Path>>(
    formatter: &Formatter<'_>,
    paths: &[P],
    stdin: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitStatus {
    let mut batch = Batch {
        formatter,
        out,
        err,
        status: ExitStatus::Success,
    };

    if paths.is_empty() {
        batch.format(Source::stdin(stdin));
    } else {
        for path in paths {
            batch.visit(path.as_ref());
        }
    }

    batch.status
}

struct Batch<'r, 'w> {
    formatter: &'r Formatter<'r>,
    out: &'w mut dyn Write,
    err: &'w mut dyn Write,
    status: ExitStatus,
}

impl Batch<'_, '_> {
    fn report(&mut self, error: MarkdownfmtError) {
        // Nowhere left to report a failing diagnostics sink.
        let _ = writeln!(self.err, "{error}");
        self.status.raise(ExitStatus::Error);
    }

    fn format(&mut self, source: Source<'_>) {
        match self.formatter.format_source(source, &mut *self.out) {
            Ok(outcome) => self.status.raise(outcome.status()),
            Err(error) => self.report(error),
        }
    }

    fn walk(&mut self, root: &Path) {
        for entry in markdown_files(root) {
            match entry {
                Ok(path) => self.format(Source::file(path)),
                Err(error) => self.report(error),
            }
        }
    }

    fn visit(&mut self, path: &Path) {
        match std::fs::metadata(path) {
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                self.report(MarkdownfmtError::PathNotFound(path.to_path_buf()))
            }
            Err(source) => self.report(MarkdownfmtError::Stat {
                path: path.to_path_buf(),
                source,
            }),
            Ok(meta) if meta.is_dir() => self.walk(path),
            Ok(_) => self.format(Source::file(path)),
        }
    }
}
