//! Standalone docsift MCP server binary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use docsift_core::Config;
use tracing_subscriber::filter::LevelFilter;

/// MCP server for searching and organizing Markdown command notes
#[derive(Parser, Debug)]
#[command(name = "docsift-mcp", version, about)]
struct Args {
    /// Directory holding the documents
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::resolve(args.config.as_deref(), args.data_dir)
        .context("failed to load configuration")?;

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else if args.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::INFO
    };

    docsift_mcp::serve_stdio(&config, level).await?;
    Ok(())
}
