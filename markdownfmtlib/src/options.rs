//! Output modes for a formatting run.
//!
//! The three explicit modes are independent switches; printing the
//! formatted document is the fallback when none of them is set.

/// Which outputs the formatter produces for each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// List files whose formatting differs
    pub list: bool,
    /// Write the result back to the source file
    pub write: bool,
    /// Print a unified diff of the changes
    pub diff: bool,
}

impl FormatOptions {
    /// Create options with every mode off (print formatted output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set list mode
    pub fn list(mut self, enabled: bool) -> Self {
        self.list = enabled;
        self
    }

    /// Builder: set write mode
    pub fn write(mut self, enabled: bool) -> Self {
        self.write = enabled;
        self
    }

    /// Builder: set diff mode
    pub fn diff(mut self, enabled: bool) -> Self {
        self.diff = enabled;
        self
    }

    /// Whether formatted output is printed to the output sink.
    ///
    /// True exactly when list, write and diff are all off.
    pub fn prints_default(&self) -> bool {
        !self.list && !self.write && !self.diff
    }
}
