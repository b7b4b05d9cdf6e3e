//! Organize command implementation

use anyhow::{Context, Result};
use docsift_core::Config;

/// Execute the organize command
///
/// Sends the whole corpus plus the instruction to the configured model.
pub async fn execute(config: &Config, instruction: &[String]) -> Result<()> {
    let instruction = instruction.join(" ");
    tracing::debug!(model = %config.gateway.model, "organizing content");

    let answer = super::service(config)?
        .organize_content(&instruction)
        .await
        .context("Organizing content failed")?;

    println!("{answer}");
    Ok(())
}
