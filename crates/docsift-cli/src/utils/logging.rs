//! Logging initialization.
//!
//! Sets up the tracing subscriber from the CLI flags. Everything is written
//! to stderr so stdout carries only command output (or the MCP protocol).

use anyhow::Result;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::{Cli, Commands};

/// Pick the base log level from the global flags.
///
/// The MCP server logs at INFO by default; one-shot commands stay at WARN so
/// their output is not interleaved with progress lines.
pub const fn level_for(cli: &Cli) -> LevelFilter {
    if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else if matches!(cli.command, Commands::Mcp) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(docsift_mcp::log_filter(level_for(cli)))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn level(args: &[&str]) -> LevelFilter {
        level_for(&Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_levels() {
        assert_eq!(level(&["docsift", "list"]), LevelFilter::WARN);
        assert_eq!(level(&["docsift", "mcp"]), LevelFilter::INFO);
        assert_eq!(level(&["docsift", "-v", "list"]), LevelFilter::DEBUG);
        assert_eq!(level(&["docsift", "-q", "mcp"]), LevelFilter::ERROR);
    }
}
