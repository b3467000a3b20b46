//! Error types for markdownfmtlib

use std::path::PathBuf;
use thiserror::Error;

use crate::diff::DiffError;

/// Errors that can occur while formatting a batch of documents.
///
/// Every variant is local to one path or document; callers report it and
/// carry on with the rest of the batch.
#[derive(Error, Debug)]
pub enum MarkdownfmtError {
    /// Path given on the command line does not exist
    #[error("stat {0}: no such file or directory")]
    PathNotFound(PathBuf),

    /// Path exists but its metadata could not be read
    #[error("stat {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A directory entry could not be read during a walk
    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to open or read a named document
    #[error("open {name}: {source}")]
    FileRead {
        name: String,
        source: std::io::Error,
    },

    /// Failed to read a document from a stream
    #[error("read {name}: {source}")]
    StreamRead {
        name: String,
        source: std::io::Error,
    },

    /// The normalizer rejected a document
    #[error("{name}:{line}:{column}: {message}")]
    Normalize {
        name: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// Failed to overwrite a document in place
    #[error("write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Write mode was requested for a source that is not a file
    #[error("cannot write formatted output back to {0}")]
    NotWritable(String),

    /// The diff capability failed
    #[error("computing diff: {0}")]
    Diff(#[from] DiffError),

    /// Failed to write to the output sink
    #[error("writing out: {0}")]
    Output(#[source] std::io::Error),
}
