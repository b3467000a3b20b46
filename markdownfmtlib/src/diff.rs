//! Unified diffs between a document and its formatted rendering.
//!
//! The [`DiffEngine`] trait is the seam between the formatter and whatever
//! produces the diff text. [`ExternalDiff`] shells out to a `diff -u`
//! compatible program, using two temporary files as the interchange format.
//! Any `Fn(&[u8], &[u8]) -> Result<Vec<u8>, DiffError>` closure is also a
//! [`DiffEngine`], which keeps the formatter testable without a diff binary.

use std::ffi::OsString;
use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;
use thiserror::Error;

/// Prefix for the temporary files handed to the diff program.
const TEMP_PREFIX: &str = "markdownfmt";

/// Errors produced while computing a diff.
#[derive(Error, Debug)]
pub enum DiffError {
    /// Failed to stage the inputs in temporary files
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The diff program could not be started
    #[error("running {program}: {source}")]
    Unavailable {
        program: String,
        source: std::io::Error,
    },

    /// The diff program failed without producing any output
    #[error("diff program exited with {status} and no output")]
    Failed { status: std::process::ExitStatus },
}

/// Produces unified diff text for two byte sequences.
pub trait DiffEngine {
    /// Compare `original` against `formatted`, returning the literal diff text.
    fn unified_diff(&self, original: &[u8], formatted: &[u8]) -> Result<Vec<u8>, DiffError>;
}

impl<F> DiffEngine for F
where
    F: Fn(&[u8], &[u8]) -> Result<Vec<u8>, DiffError>,
{
    fn unified_diff(&self, original: &[u8], formatted: &[u8]) -> Result<Vec<u8>, DiffError> {
        self(original, formatted)
    }
}

/// A diff engine backed by an external `diff -u` style program.
#[derive(Debug, Clone)]
pub struct ExternalDiff {
    /// Program to run
    pub program: OsString,
    /// Arguments placed before the two file paths
    pub args: Vec<OsString>,
}

impl Default for ExternalDiff {
    fn default() -> Self {
        Self {
            program: OsString::from("diff"),
            args: vec![OsString::from("-u")],
        }
    }
}

impl ExternalDiff {
    /// Create the default engine (`diff -u`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different program, keeping the current arguments.
    pub fn program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the arguments placed before the two file paths.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

fn stage(data: &[u8]) -> Result<NamedTempFile, DiffError> {
    let mut file = tempfile::Builder::new().prefix(TEMP_PREFIX).tempfile()?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}

impl DiffEngine for ExternalDiff {
    fn unified_diff(&self, original: &[u8], formatted: &[u8]) -> Result<Vec<u8>, DiffError> {
        // Both files are removed when dropped, on every return path.
        let before = stage(original)?;
        let after = stage(formatted)?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(before.path())
            .arg(after.path())
            .output()
            .map_err(|source| DiffError::Unavailable {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        let mut data = output.stdout;
        data.extend_from_slice(&output.stderr);

        // stdout followed by stderr, not interleaved. diff exits non-zero when
        // the inputs differ; that is only a failure when nothing was printed.
        if output.status.success() || !data.is_empty() {
            Ok(data)
        } else {
            Err(DiffError::Failed {
                status: output.status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff_available() -> bool {
        Command::new("diff").arg("--version").output().is_ok()
    }

    #[test]
    fn test_external_diff_reports_changes() {
        if !diff_available() {
            return;
        }

        let data = ExternalDiff::new()
            .unified_diff(b"# Title\n\n*  item\n", b"# Title\n\n- item\n")
            .unwrap();
        let text = String::from_utf8(data).unwrap();

        assert!(text.contains("@@"));
        assert!(text.contains("-*  item"));
        assert!(text.contains("+- item"));
    }

    #[test]
    fn test_external_diff_identical_inputs() {
        if !diff_available() {
            return;
        }

        let data = ExternalDiff::new().unified_diff(b"same\n", b"same\n").unwrap();

        assert!(data.is_empty());
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let engine = ExternalDiff::new().program("markdownfmt-no-such-diff-program");
        let result = engine.unified_diff(b"a\n", b"b\n");

        match result {
            Err(DiffError::Unavailable { program, .. }) => {
                assert_eq!(program, "markdownfmt-no-such-diff-program");
            }
            other => panic!("Expected Unavailable error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_failure_is_an_error() {
        // `false` exits 1 without output
        let engine = ExternalDiff::new().program("false").args(Vec::<OsString>::new());
        let result = engine.unified_diff(b"a\n", b"b\n");

        assert!(matches!(result, Err(DiffError::Failed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_with_output_is_not_an_error() {
        let engine = ExternalDiff::new().program("sh").args(["-c", "echo changed; exit 1", "sh"]);
        let data = engine.unified_diff(b"a\n", b"b\n").unwrap();

        assert_eq!(data, b"changed\n");
    }

    #[test]
    fn test_closure_engine() {
        let engine = |a: &[u8], b: &[u8]| -> Result<Vec<u8>, DiffError> {
            Ok(format!("{} -> {}", a.len(), b.len()).into_bytes())
        };

        assert_eq!(engine.unified_diff(b"abc", b"de").unwrap(), b"3 -> 2");
    }
}
