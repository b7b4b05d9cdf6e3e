//! # CLI Structure and Argument Parsing
//!
//! `docsift` exposes the same four document operations as the MCP server,
//! plus `mcp` to run that server in-process.
//!
//! ```bash
//! docsift search docker ps
//! docsift list
//! docsift get WSL.md
//! docsift organize "list every network configuration command"
//! docsift --data-dir ~/notes mcp
//! ```
//!
//! Results go to stdout; logs and errors go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main CLI structure for the `docsift` command
#[derive(Parser, Clone, Debug)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "docsift - search and organize Markdown command notes", long_about = None)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Directory holding the documents (overrides config and `DOCSIFT_DATA_DIR`)
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Search documents for commands or content by keyword
    Search {
        /// Search keywords
        #[arg(value_name = "QUERY", required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List the commands of every document, grouped by file and section
    List,

    /// Print the full content of one document
    Get {
        /// File name to read, e.g. `WSL.md` (case-insensitive)
        filename: String,
    },

    /// Ask the language model to organize or extract from all documents
    Organize {
        /// Instruction for the model
        #[arg(value_name = "INSTRUCTION", required = true, num_args = 1..)]
        instruction: Vec<String>,
    },

    /// Run the MCP server over stdio
    Mcp,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_collects_words() {
        let cli = Cli::try_parse_from(["docsift", "search", "docker", "ps"]).unwrap();
        match cli.command {
            Commands::Search { query } => assert_eq!(query, vec!["docker", "ps"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docsift", "list", "--data-dir", "/tmp/notes", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/notes")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["docsift", "-v", "-q", "list"]).is_err());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["docsift", "search"]).is_err());
    }
}
