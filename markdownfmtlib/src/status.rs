//! Aggregate outcome of a run.

/// Severity-ordered process outcome.
///
/// Variants are ordered so that `Error > DiffsFound > Success`; a run only
/// ever moves up this order through [`ExitStatus::raise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ExitStatus {
    /// Nothing to report
    #[default]
    Success,
    /// Diff mode found at least one document that would change
    DiffsFound,
    /// At least one error was reported
    Error,
}

impl ExitStatus {
    /// Escalate to `other` if it is more severe; never downgrades.
    pub fn raise(&mut self, other: ExitStatus) {
        if other > *self {
            *self = other;
        }
    }

    /// Process exit code: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::DiffsFound => 1,
            ExitStatus::Error => 2,
        }
    }
}
