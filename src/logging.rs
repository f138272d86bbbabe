// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostic logging setup for the command-line tool.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Pick the default filter directive from the verbosity flags.
///
/// `verbose` wins over `quiet`; with neither, only warnings are shown.
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Install a compact stderr subscriber. `RUST_LOG`, when set, overrides the
/// level chosen from the flags.
pub fn init(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_quiet() {
        assert_eq!(default_level(true, true), "debug");
        assert_eq!(default_level(false, true), "error");
        assert_eq!(default_level(false, false), "warn");
    }
}
