//! Line-oriented extraction of command snippets from Markdown-like notes.
//!
//! The parser walks a document once, tracking the governing `## ` section,
//! `### ` title and the prose collected under that title. A [`ContentBlock`]
//! is produced only when a fenced code block closes with a non-blank body, so
//! headings without code never show up in the output.
//!
//! ```rust
//! use docsift_core::parser::parse_blocks;
//!
//! let blocks = parse_blocks("## Net\n### Show IP\nList addresses\n```bash\nip addr show\n```\n");
//!
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].section, "Net");
//! assert_eq!(blocks[0].title, "Show IP");
//! assert_eq!(blocks[0].description, "List addresses");
//! assert_eq!(blocks[0].command, "ip addr show");
//! assert_eq!(blocks[0].language, "bash");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::ContentBlock;

/// Level-2 heading: `## Section`
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.+)$").unwrap());

/// Level-3 heading: `### Title`
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+(.+)$").unwrap());

/// Opening fence with an optional word-character info string and nothing else.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([A-Za-z0-9_]*)$").unwrap());

const FENCE: &str = "```";

/// Split text on `\n`, dropping one trailing `\r` per line.
///
/// A trailing newline yields a final empty line, which keeps line numbers
/// aligned with what editors show.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parse a document into its command blocks, in document order.
pub fn parse_blocks(content: &str) -> Vec<ContentBlock> {
    let mut parser = BlockParser::new();
    for line in split_lines(content) {
        parser.feed_line(line);
    }
    parser.finish()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParserState {
    Normal,
    InCodeBlock { language: String, buffer: String },
}

/// Incremental block parser.
///
/// Feed lines with [`BlockParser::feed_line`] and collect the result with
/// [`BlockParser::finish`]. Section, title and description are captured at the
/// moment a fence closes; later headings never rewrite earlier blocks.
#[derive(Debug)]
pub struct BlockParser {
    state: ParserState,
    section: String,
    title: String,
    description: String,
    blocks: Vec<ContentBlock>,
}

impl BlockParser {
    /// A parser in its initial state, outside any fence.
    pub const fn new() -> Self {
        Self {
            state: ParserState::Normal,
            section: String::new(),
            title: String::new(),
            description: String::new(),
            blocks: Vec::new(),
        }
    }

    /// Whether the parser is currently inside an open fence.
    pub const fn in_code_block(&self) -> bool {
        matches!(self.state, ParserState::InCodeBlock { .. })
    }

    /// Advance the state machine by one line.
    pub fn feed_line(&mut self, line: &str) {
        if self.in_code_block() {
            self.feed_code_line(line);
        } else {
            self.feed_normal_line(line);
        }
    }

    fn feed_normal_line(&mut self, line: &str) {
        if let Some(caps) = SECTION_RE.captures(line) {
            self.section = caps[1].trim().to_string();
            return;
        }

        if let Some(caps) = TITLE_RE.captures(line) {
            self.title = caps[1].trim().to_string();
            self.description.clear();
            return;
        }

        if let Some(caps) = FENCE_OPEN_RE.captures(line) {
            self.state = ParserState::InCodeBlock {
                language: caps[1].to_string(),
                buffer: String::new(),
            };
            return;
        }

        // Other headings (`#`, `####`, ...) are skipped; blank lines carry nothing.
        if !line.starts_with('#') && !line.trim().is_empty() {
            self.description.push_str(line);
            self.description.push(' ');
        }
    }

    fn feed_code_line(&mut self, line: &str) {
        if line.starts_with(FENCE) {
            self.close_fence();
            return;
        }

        if let ParserState::InCodeBlock { buffer, .. } = &mut self.state {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }

    fn close_fence(&mut self) {
        let ParserState::InCodeBlock { language, buffer } =
            std::mem::replace(&mut self.state, ParserState::Normal)
        else {
            return;
        };

        let command = buffer.trim();
        if command.is_empty() {
            tracing::trace!(title = %self.title, "skipping empty code block");
            return;
        }

        self.blocks.push(ContentBlock {
            section: self.section.clone(),
            title: self.title.clone(),
            description: self.description.trim().to_string(),
            command: command.to_string(),
            language,
        });
    }

    /// Consume the parser and return every emitted block.
    ///
    /// A fence still open at end of input is discarded.
    pub fn finish(self) -> Vec<ContentBlock> {
        if let ParserState::InCodeBlock { buffer, .. } = &self.state {
            tracing::trace!(
                dangling_bytes = buffer.len(),
                "dropping unterminated code block"
            );
        }
        self.blocks
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}
