//! Markdown text rendering of search results, listings and files.

use std::fmt::Write as _;

use crate::listing::{CommandListing, ListingEntry};
use crate::{Document, ScoredResult};

/// Reply when nothing matched a query.
pub const NO_MATCHES: &str = "No matching content found.";

/// Heading used for results without a title.
const UNTITLED: &str = "Matched content";

/// Render ranked results as a numbered Markdown report.
pub fn format_results(results: &[ScoredResult]) -> String {
    if results.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut out = format!("Found {} matching results:\n\n", results.len());

    for (i, result) in results.iter().enumerate() {
        let block = &result.block;
        let title = if block.title.is_empty() {
            UNTITLED
        } else {
            block.title.as_str()
        };

        out.push_str("---\n");
        let _ = writeln!(out, "### {}. {title}", i + 1);

        if !block.section.is_empty() {
            let _ = writeln!(out, "**Section**: {}", block.section);
        }

        let _ = writeln!(out, "**Source file**: {}", result.filename);

        if !block.command.is_empty() {
            let _ = write!(
                out,
                "\n**Command**:\n```{}\n{}\n```\n",
                block.language, block.command
            );
        }

        if !block.description.is_empty() {
            let _ = write!(out, "\n**Description**: {}\n", block.description);
        }

        if let Some(line) = result.line_number {
            let _ = writeln!(out, "**Line**: {line}");
        }

        out.push('\n');
    }

    out
}

/// Render the grouped command listing.
pub fn format_listing(listing: &CommandListing) -> String {
    let mut out = String::from("# Available commands\n\n");

    for document in &listing.documents {
        let _ = write!(out, "## 📄 {}\n\n", document.filename);

        for entry in &document.entries {
            match entry {
                ListingEntry::Section(section) => {
                    let _ = write!(out, "### {section}\n\n");
                },
                ListingEntry::Command(title) => {
                    let _ = writeln!(out, "- **{title}**");
                },
            }
        }

        out.push('\n');
    }

    out
}

/// Render a whole file under its name.
pub fn format_file(document: &Document) -> String {
    format!("# {}\n\n{}", document.filename, document.content)
}

/// Not-found reply listing every available file name.
pub fn format_not_found<'a>(name: &str, available: impl IntoIterator<Item = &'a str>) -> String {
    let files: Vec<String> = available
        .into_iter()
        .map(|filename| format!("- {filename}"))
        .collect();
    format!(
        "File not found: {name}\n\nAvailable files:\n{}",
        files.join("\n")
    )
}
