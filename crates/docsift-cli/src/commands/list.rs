//! List command implementation

use anyhow::{Context, Result};
use docsift_core::Config;

/// Execute the list command
pub async fn execute(config: &Config) -> Result<()> {
    let listing = super::service(config)?
        .list_commands()
        .await
        .context("Listing commands failed")?;

    println!("{listing}");
    Ok(())
}
