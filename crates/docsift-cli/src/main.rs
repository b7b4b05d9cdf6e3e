//! docsift CLI - search and organize Markdown command notes
//!
//! This is the main entry point for the docsift command-line interface.

use anyhow::{Context, Result};
use clap::Parser;
use docsift_core::Config;

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands};
use utils::logging::initialize_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = Config::resolve(cli.config.as_deref(), cli.data_dir.clone())
        .context("failed to load configuration")?;
    tracing::debug!(root = %config.data.root.display(), "configuration loaded");

    execute_command(cli.command, &config).await
}

async fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Search { query } => commands::search(config, &query).await,
        Commands::List => commands::list_commands(config).await,
        Commands::Get { filename } => commands::get_file(config, &filename).await,
        Commands::Organize { instruction } => commands::organize(config, &instruction).await,
        Commands::Mcp => commands::serve_mcp(config).await,
    }
}
