//! Logging setup for the CLI.
//!
//! Events go to standard error without timestamps. `RUST_LOG` takes
//! precedence over the `-v` flag.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directives, by verbosity.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,markdownfmtlib=info"
    } else {
        "warn"
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init()
        .context("failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("markdownfmtlib=info"));
    }
}
