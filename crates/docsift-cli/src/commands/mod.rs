//! Command implementations for the docsift CLI
//!
//! Each document command builds a [`ContentService`] and prints the text it
//! returns; `mcp` hands the same configuration to the MCP server.

mod get;
mod list;
mod mcp;
mod organize;
mod search;

pub use get::execute as get_file;
pub use list::execute as list_commands;
pub use mcp::execute as serve_mcp;
pub use organize::execute as organize;
pub use search::execute as search;

use anyhow::{Context, Result};
use docsift_core::{Config, ContentService};

fn service(config: &Config) -> Result<ContentService> {
    ContentService::from_config(config).context("failed to create document service")
}
