//! MCP (Model Context Protocol) server command
//!
//! Launches the docsift MCP server via stdio transport for AI agent integration.

use anyhow::Result;
use docsift_core::Config;
use docsift_mcp::McpServer;

/// Execute the MCP server command
///
/// Tracing is already initialized by the CLI, so this builds the server
/// directly instead of going through `docsift_mcp::serve_stdio`.
///
/// # Errors
///
/// Returns an error if the server fails to initialize or encounters a runtime error.
pub async fn execute(config: &Config) -> Result<()> {
    tracing::debug!("initializing docsift MCP server");

    let server = McpServer::new(config)?;
    server.serve_stdio().await?;

    Ok(())
}
