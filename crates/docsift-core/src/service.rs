//! The four document operations, as plain async methods returning text.
//!
//! Each call re-reads the corpus from disk, so edits to the data directory
//! are visible on the next request without any invalidation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::context::{build_context, build_messages};
use crate::format::{format_file, format_listing, format_not_found, format_results};
use crate::gateway::{ChatCompletionsGateway, ModelGateway};
use crate::listing::list_commands;
use crate::loader::Corpus;
use crate::search::search;
use crate::{Error, Result};

/// Reply from `search_content` when the corpus is empty.
pub const EMPTY_SEARCH_MESSAGE: &str =
    "The data directory is empty or missing. Add document files to it and try again.";
/// Reply from `list_commands` when the corpus is empty.
pub const EMPTY_LIST_MESSAGE: &str = "The data directory is empty or missing.";
/// Reply from `organize_content` when the corpus is empty.
pub const EMPTY_ORGANIZE_MESSAGE: &str = "The data directory is empty; there is nothing to organize.";

/// Document search, listing, retrieval and model-backed organization.
#[derive(Clone)]
pub struct ContentService {
    root: PathBuf,
    extensions: Vec<String>,
    gateway: Arc<dyn ModelGateway>,
}

impl ContentService {
    /// Build a service from configuration, using the HTTP chat gateway.
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = ChatCompletionsGateway::new(config.gateway.clone())?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Build a service with a caller-supplied gateway.
    pub fn with_gateway(config: &Config, gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            root: config.data.root.clone(),
            extensions: config.data.extensions.clone(),
            gateway,
        }
    }

    /// Data directory this service reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the corpus as it is on disk right now.
    pub fn load_corpus(&self) -> Corpus {
        Corpus::load(&self.root, &self.extensions)
    }

    /// Ranked keyword search, rendered as a report.
    pub async fn search_content(&self, query: &str) -> Result<String> {
        tracing::info!(%query, "search request");

        let corpus = self.load_corpus();
        if corpus.is_empty() {
            return Ok(EMPTY_SEARCH_MESSAGE.to_string());
        }
        tracing::debug!(files = corpus.len(), "searching corpus");

        let results = search(query, corpus.documents());
        Ok(format_results(&results))
    }

    /// Every command title, grouped by file and section.
    pub async fn list_commands(&self) -> Result<String> {
        let corpus = self.load_corpus();
        if corpus.is_empty() {
            return Ok(EMPTY_LIST_MESSAGE.to_string());
        }

        Ok(format_listing(&list_commands(corpus.documents())))
    }

    /// A whole file by case-insensitive name, or the list of available names.
    pub async fn get_file_content(&self, filename: &str) -> Result<String> {
        let corpus = self.load_corpus();

        match corpus.find_by_name(filename) {
            Ok(document) => Ok(format_file(document)),
            Err(Error::NotFound(name)) => {
                tracing::debug!(%name, "requested file not in corpus");
                Ok(format_not_found(&name, corpus.filenames()))
            },
            Err(e) => Err(e),
        }
    }

    /// Send the whole corpus and an instruction to the model.
    pub async fn organize_content(&self, instruction: &str) -> Result<String> {
        let corpus = self.load_corpus();
        if corpus.is_empty() {
            return Ok(EMPTY_ORGANIZE_MESSAGE.to_string());
        }

        let context = build_context(corpus.documents());
        let messages = build_messages(&context, instruction);

        tracing::info!(%instruction, context_chars = context.chars().count(), "asking model");
        self.gateway.ask(&messages).await
    }
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("root", &self.root)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}
