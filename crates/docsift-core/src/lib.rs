//! # docsift-core
//!
//! Search and summarize a folder of Markdown command notes.
//!
//! Documents are read fresh from disk on every call. Each document is split
//! into command blocks (a fenced code sample plus the `## ` section and
//! `### ` title that precede it) and blocks are ranked against a keyword
//! query. Documents without matching blocks fall back to a line-level
//! full-text scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use docsift_core::{Document, format::format_results, search::search};
//!
//! let docs = vec![Document::new(
//!     "net.md",
//!     "## Net\n### Show IP\n```bash\nip addr show\n```\n",
//!     "data/net.md",
//! )];
//!
//! let results = search("ip", &docs);
//! assert_eq!(results[0].block.title, "Show IP");
//!
//! let report = format_results(&results);
//! assert!(report.starts_with("Found 1 matching results"));
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: recursive directory reading and file lookup
//! - [`parser`]: command-block extraction
//! - [`search`]: scoring, fallback and ranking
//! - [`listing`]: grouped command summaries
//! - [`format`]: Markdown text rendering
//! - [`context`]: prompt construction for the model
//! - [`gateway`]: chat-completions client
//! - [`service`]: the four operations behind one facade

#![deny(missing_docs)]

/// Configuration loading and environment overrides
pub mod config;
/// Model prompt construction
pub mod context;
/// Error types and result aliases
pub mod error;
/// Text rendering of results and listings
pub mod format;
/// Chat-completions client
pub mod gateway;
/// Grouped command listing
pub mod listing;
/// Directory traversal and file lookup
pub mod loader;
/// Line-oriented command-block parser
pub mod parser;
/// Keyword ranking with full-text fallback
pub mod search;
/// High-level document operations
pub mod service;
/// Core data types
pub mod types;

pub use config::{Config, DataConfig, GatewayConfig};
pub use error::{Error, Result};
pub use gateway::{ChatCompletionsGateway, ChatMessage, ModelGateway, Role};
pub use loader::Corpus;
pub use search::Query;
pub use service::ContentService;
pub use types::*;
