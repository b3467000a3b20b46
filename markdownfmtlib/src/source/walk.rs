//! Depth-first discovery of Markdown documents under a directory.
//!
//! [`markdown_files`] is lazy: each document is yielded as soon as the walk
//! reaches it, so callers can format it before the walk moves on. Entries
//! that cannot be read are yielded as errors and the walk continues past them.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, FilterEntry, WalkDir};

use super::filter::{is_markdown_file, should_skip_dir};
use crate::Result;

/// Iterator over the Markdown documents of a directory tree.
pub struct MarkdownFiles {
    inner: FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
}

/// Walk `root` in pre-order, sorted by file name, pruning blocklisted directories.
///
/// The root itself is classified like any other entry, so walking a
/// directory named `vendor` yields nothing. Symlinks are never followed,
/// the root included.
pub fn markdown_files(root: impl AsRef<Path>) -> MarkdownFiles {
    let walker = WalkDir::new(root.as_ref())
        .follow_root_links(false)
        .sort_by_file_name()
        .into_iter();
    MarkdownFiles {
        inner: walker.filter_entry(keep_entry as fn(&DirEntry) -> bool),
    }
}

fn entry_name(entry: &DirEntry) -> std::borrow::Cow<'_, str> {
    entry.file_name().to_string_lossy()
}

fn keep_entry(entry: &DirEntry) -> bool {
    let skip = should_skip_dir(&entry_name(entry), entry.file_type().is_dir());
    if skip {
        tracing::debug!(path = %entry.path().display(), "skipping directory");
    }
    !skip
}

impl Iterator for MarkdownFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Err(err) => return Some(Err(err.into())),
                Ok(entry) => {
                    if is_markdown_file(&entry_name(&entry), entry.file_type().is_dir()) {
                        return Some(Ok(entry.into_path()));
                    }
                }
            }
        }
    }
}
