use serde::{Deserialize, Serialize};

/// A text file read from the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Bare file name, e.g. `WSL.md`
    pub filename: String,
    /// Full text as read from disk
    pub content: String,
    /// Path the file was read from
    pub filepath: String,
}

impl Document {
    /// Build a document from its parts.
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
        filepath: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            filepath: filepath.into(),
        }
    }
}

/// One fenced code sample together with the headings and prose that precede it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Most recent `## ` heading
    pub section: String,
    /// Most recent `### ` heading
    pub title: String,
    /// Prose lines between the title and the fence, space-joined
    pub description: String,
    /// Fence body with surrounding whitespace trimmed
    pub command: String,
    /// Fence info string, e.g. `bash`
    pub language: String,
}

/// A ranked search hit: either a parsed block or a full-text line match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    /// Matched block; for full-text hits only the title and description are set
    #[serde(flatten)]
    pub block: ContentBlock,
    /// File the hit came from
    pub filename: String,
    /// Relevance score, higher is better
    pub score: u32,
    /// 1-based line of a full-text match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl ScoredResult {
    /// Whether this hit came from the line-level fallback scan.
    pub const fn is_full_text(&self) -> bool {
        self.line_number.is_some()
    }
}
