//! The transformation seam.
//!
//! The formatter never looks inside a document; it hands the bytes to a
//! [`Normalize`] implementation and compares what comes back. The built-in
//! implementation is [`MarkdownNormalizer`](crate::markdown::MarkdownNormalizer).

use crate::Result;

/// Renders a document in canonical form.
///
/// Implementations must be pure: the same name and bytes always produce the
/// same output. An error means the bytes could not be read as a document of
/// the expected format.
pub trait Normalize {
    /// Normalize `src`, using `name` only for diagnostics.
    fn normalize(&self, name: &str, src: &[u8]) -> Result<Vec<u8>>;
}

impl<F> Normalize for F
where
    F: Fn(&str, &[u8]) -> Result<Vec<u8>>,
{
    fn normalize(&self, name: &str, src: &[u8]) -> Result<Vec<u8>> {
        self(name, src)
    }
}
