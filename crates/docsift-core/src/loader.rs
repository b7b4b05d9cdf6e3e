//! Reading the document corpus from disk.
//!
//! The corpus is rebuilt on every call; nothing here caches. Unreadable files
//! are logged and skipped so a single bad file never hides the rest.

use std::path::Path;

use walkdir::WalkDir;

use crate::{Document, Error, Result};

/// File extensions read by default, lowercase with the leading dot.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".md", ".txt", ".json", ".yaml", ".yml", ".html", ".xml"];

/// Whether `path` carries one of the allowed extensions (case-insensitive).
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let dotted = format!(".{}", ext.to_lowercase());
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(&dotted))
        })
}

/// Recursively read every allowed text file under `root`.
///
/// Entries are visited depth-first in file-name order and symbolic links are
/// followed. A missing root yields an empty vector.
pub fn load_documents(root: &Path, extensions: &[String]) -> Vec<Document> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "data directory missing or not a directory");
        return Vec::new();
    }

    let mut documents = Vec::new();

    // Symlinked files and directories count; walkdir reports link loops as errors.
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "failed to access directory entry");
                continue;
            },
        };

        if !entry.file_type().is_file() || !has_allowed_extension(entry.path(), extensions) {
            continue;
        }

        let path = entry.path();
        match std::fs::read_to_string(path) {
            Ok(content) => documents.push(Document {
                filename: entry.file_name().to_string_lossy().into_owned(),
                content,
                filepath: path.to_string_lossy().into_owned(),
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read file, skipping");
            },
        }
    }

    tracing::debug!(root = %root.display(), count = documents.len(), "loaded documents");
    documents
}

/// The set of documents loaded for one request.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Wrap already-loaded documents.
    pub const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Load the corpus from `root`.
    pub fn load(root: &Path, extensions: &[String]) -> Self {
        Self::new(load_documents(root, extensions))
    }

    /// Documents in load order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents were loaded.
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// File names in load order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.filename.as_str())
    }

    /// Find a document by exact file name, ignoring case. First match wins.
    pub fn find_by_name(&self, name: &str) -> Result<&Document> {
        let wanted = name.to_lowercase();
        self.documents
            .iter()
            .find(|doc| doc.filename.to_lowercase() == wanted)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

impl From<Vec<Document>> for Corpus {
    fn from(documents: Vec<Document>) -> Self {
        Self::new(documents)
    }
}
