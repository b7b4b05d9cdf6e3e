//! Per-document summary of every command block, grouped by section.

use serde::Serialize;

use crate::Document;
use crate::parser::parse_blocks;

/// One line of a document's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ListingEntry {
    /// A section header, emitted when the section changes
    Section(String),
    /// A block title
    Command(String),
}

/// Listing lines for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentListing {
    /// File the entries come from
    pub filename: String,
    /// Section headers and titles in document order
    pub entries: Vec<ListingEntry>,
}

/// Listing for the whole corpus. Documents without blocks are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandListing {
    /// Per-document listings in load order
    pub documents: Vec<DocumentListing>,
}

impl CommandListing {
    /// Whether no document produced any entry.
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Build the listing for one document, or `None` when it has no blocks.
pub fn list_document(document: &Document) -> Option<DocumentListing> {
    let blocks = parse_blocks(&document.content);
    if blocks.is_empty() {
        return None;
    }

    let mut entries = Vec::new();
    let mut current_section = "";

    for block in &blocks {
        // An empty section never opens a header and never resets the current one.
        if !block.section.is_empty() && block.section != current_section {
            current_section = &block.section;
            entries.push(ListingEntry::Section(block.section.clone()));
        }

        if !block.title.is_empty() {
            entries.push(ListingEntry::Command(block.title.clone()));
        }
    }

    Some(DocumentListing {
        filename: document.filename.clone(),
        entries,
    })
}

/// Group every block in `documents` by document and section.
pub fn list_commands(documents: &[Document]) -> CommandListing {
    CommandListing {
        documents: documents.iter().filter_map(list_document).collect(),
    }
}
