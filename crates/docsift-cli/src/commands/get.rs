//! Get command implementation

use anyhow::{Context, Result};
use docsift_core::Config;

/// Execute the get command
///
/// A missing file is not a failure: the reply lists the files that exist.
pub async fn execute(config: &Config, filename: &str) -> Result<()> {
    let content = super::service(config)?
        .get_file_content(filename)
        .await
        .context("Reading file failed")?;

    println!("{content}");
    Ok(())
}
