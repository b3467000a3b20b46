//! Path classification for directory walks.
//!
//! Two pure predicates decide what a walk does with each entry: prune a
//! directory subtree, or hand a file to the formatter. Nothing here touches
//! the filesystem; callers pass the entry's base name and kind.

/// Directory names that are never descended into.
pub const SKIPPED_DIRS: &[&str] = &[".git", ".github", "vendor", "node_modules", "third_party"];

/// File name suffixes that mark a Markdown document.
pub const MARKDOWN_SUFFIXES: &[&str] = &[".md", ".markdown"];

/// Check if a directory should be pruned during traversal.
///
/// Matching is on the exact base name; `vendored` or `.gitignore` do not match.
pub fn should_skip_dir(name: &str, is_dir: bool) -> bool {
    is_dir && SKIPPED_DIRS.contains(&name)
}

/// Check if an entry is an eligible Markdown document.
///
/// An entry is eligible if:
/// 1. It is not a directory
/// 2. Its name does not start with `.`
/// 3. Its name ends with one of [`MARKDOWN_SUFFIXES`]
pub fn is_markdown_file(name: &str, is_dir: bool) -> bool {
    !is_dir
        && !name.starts_with('.')
        && MARKDOWN_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(suffix))
}
