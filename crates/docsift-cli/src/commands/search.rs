//! Search command implementation

use anyhow::{Context, Result};
use docsift_core::Config;

/// Execute the search command; the words are joined into one query.
pub async fn execute(config: &Config, query: &[String]) -> Result<()> {
    let query = query.join(" ");
    let report = super::service(config)?
        .search_content(&query)
        .await
        .context("Search failed")?;

    println!("{report}");
    Ok(())
}
