//! Keyword ranking over parsed command blocks with a full-text fallback.
//!
//! ## Scoring
//!
//! Every whitespace-separated query term is matched case-insensitively as a
//! substring against each block field:
//!
//! | Field         | Points per term |
//! |---------------|-----------------|
//! | `title`       | 10              |
//! | `command`     | 8               |
//! | `section`     | 5               |
//! | `description` | 3               |
//!
//! A flat bonus of 20 is added when the title equals the whole query or the
//! command contains the whole query. Blocks scoring zero are dropped.
//!
//! ## Fallback
//!
//! While no result has been collected yet, each document is also scanned line
//! by line for the whole query and every matching line becomes a score-1 hit
//! with two lines of context on either side.

use crate::parser::{parse_blocks, split_lines};
use crate::{ContentBlock, Document, ScoredResult};

/// Maximum number of results returned by [`search`].
pub const MAX_RESULTS: usize = 10;

/// Title given to full-text fallback hits.
pub const FULL_TEXT_TITLE: &str = "Full-text match";

/// Lines of context kept before and after a full-text hit.
pub const CONTEXT_LINES: usize = 2;

const TITLE_WEIGHT: u32 = 10;
const COMMAND_WEIGHT: u32 = 8;
const SECTION_WEIGHT: u32 = 5;
const DESCRIPTION_WEIGHT: u32 = 3;
const EXACT_MATCH_BONUS: u32 = 20;
const FULL_TEXT_SCORE: u32 = 1;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    lower: String,
    terms: Vec<String>,
}

impl Query {
    /// Normalize `raw` into its lowercase form and whitespace-separated terms.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lower = raw.to_lowercase();
        let terms = lower.split_whitespace().map(str::to_string).collect();
        Self { raw, lower, terms }
    }

    /// The query as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whole query, lowercased.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Lowercased non-empty terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Score one block against the query.
pub fn score_block(query: &Query, block: &ContentBlock) -> u32 {
    let title = block.title.to_lowercase();
    let command = block.command.to_lowercase();
    let section = block.section.to_lowercase();
    let description = block.description.to_lowercase();

    let mut score = 0;
    for term in query.terms() {
        let term = term.as_str();
        if title.contains(term) {
            score += TITLE_WEIGHT;
        }
        if command.contains(term) {
            score += COMMAND_WEIGHT;
        }
        if section.contains(term) {
            score += SECTION_WEIGHT;
        }
        if description.contains(term) {
            score += DESCRIPTION_WEIGHT;
        }
    }

    if title == query.lower() || command.contains(query.lower()) {
        score += EXACT_MATCH_BONUS;
    }

    score
}

/// Line-level matches of the whole query inside one document.
pub fn full_text_matches(query: &Query, document: &Document) -> Vec<ScoredResult> {
    let lines: Vec<&str> = split_lines(&document.content).collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(query.lower()))
        .map(|(index, _)| {
            let start = index.saturating_sub(CONTEXT_LINES);
            let end = (index + CONTEXT_LINES + 1).min(lines.len());
            ScoredResult {
                block: ContentBlock {
                    title: FULL_TEXT_TITLE.to_string(),
                    description: lines[start..end].join("\n"),
                    ..ContentBlock::default()
                },
                filename: document.filename.clone(),
                score: FULL_TEXT_SCORE,
                line_number: Some(index + 1),
            }
        })
        .collect()
}

/// Rank every block of every document against `query`.
///
/// Returns at most [`MAX_RESULTS`] hits, highest score first. Equal scores
/// keep document order, then block order.
pub fn search(query: &str, documents: &[Document]) -> Vec<ScoredResult> {
    let query = Query::new(query);
    let mut results: Vec<ScoredResult> = Vec::new();

    for document in documents {
        tracing::debug!(file = %document.filename, "searching file");

        for block in parse_blocks(&document.content) {
            let score = score_block(&query, &block);
            if score > 0 {
                results.push(ScoredResult {
                    block,
                    filename: document.filename.clone(),
                    score,
                    line_number: None,
                });
            }
        }

        // Compatibility: the fallback is gated on the shared accumulator, not on
        // this document. Once any earlier document has produced a hit, later
        // documents never fall back even when none of their blocks matched.
        if results.is_empty() {
            results.extend(full_text_matches(&query, document));
        }
    }

    // `sort_by` is stable, so ties keep encounter order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}
