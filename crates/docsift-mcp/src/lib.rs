//! docsift MCP server
//!
//! Exposes the docsift document operations (keyword search, command listing,
//! whole-file retrieval and model-backed organization) as MCP tools over
//! stdio.

pub mod error;
pub mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::McpServer;

use docsift_core::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Build a log filter that honors `RUST_LOG`, falling back to `default`.
pub fn log_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Main entry point for the MCP server
///
/// Installs a stderr-only subscriber (stdout carries the protocol), then
/// creates the server and runs it over stdio until the client disconnects.
///
/// # Errors
///
/// Returns an error if the server fails to initialize or run.
pub async fn serve_stdio(config: &Config, level: LevelFilter) -> McpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("initializing docsift MCP server");

    let server = McpServer::new(config)?;
    server.serve_stdio().await
}
