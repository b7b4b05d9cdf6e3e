//! Building the model prompt from the raw corpus.

use crate::Document;
use crate::gateway::ChatMessage;

/// Maximum context length, in characters, before truncation.
pub const MAX_CONTEXT_CHARS: usize = 100_000;

/// Appended after a truncated context.
pub const TRUNCATION_MARKER: &str = "\n...(content truncated)...";

/// System prompt sent with every organize request.
pub const SYSTEM_PROMPT: &str = "You are a professional documentation assistant. The user will provide \
technical documents (mostly Markdown command notes). Organize, extract from, or answer questions \
about them according to the user's instruction.

Follow these rules:
1. Answer precisely, based only on the provided documents.
2. When extracting commands, keep the code-block formatting.
3. If the documents do not contain the requested information, say so explicitly.
4. Keep the output clean, well structured and easy to read.";

/// Concatenate every document under a file-name banner.
///
/// The result is cut to [`MAX_CONTEXT_CHARS`] characters, followed by
/// [`TRUNCATION_MARKER`], when it would be longer.
pub fn build_context(documents: &[Document]) -> String {
    let mut context = String::new();
    for doc in documents {
        context.push_str("\n=== filename: ");
        context.push_str(&doc.filename);
        context.push_str(" ===\n\n");
        context.push_str(&doc.content);
        context.push_str("\n\n");
    }
    truncate_context(context)
}

fn truncate_context(mut context: String) -> String {
    if let Some((byte_index, _)) = context.char_indices().nth(MAX_CONTEXT_CHARS) {
        tracing::debug!(
            total_bytes = context.len(),
            kept_bytes = byte_index,
            "truncating model context"
        );
        context.truncate(byte_index);
        context.push_str(TRUNCATION_MARKER);
    }
    context
}

/// The system and user messages for an organize request.
pub fn build_messages(context: &str, instruction: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Here is the full document content:\n{context}\n\nMy instruction is: {instruction}"
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Role;

    #[test]
    fn test_context_layout() {
        let docs = vec![
            Document::new("a.md", "alpha", "/d/a.md"),
            Document::new("b.md", "beta", "/d/b.md"),
        ];

        assert_eq!(
            build_context(&docs),
            "\n=== filename: a.md ===\n\nalpha\n\n\n=== filename: b.md ===\n\nbeta\n\n"
        );
    }

    #[test]
    fn test_short_context_is_untouched() {
        let docs = vec![Document::new("a.md", "x".repeat(1000), "/d/a.md")];
        let context = build_context(&docs);

        assert!(!context.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_long_context_is_truncated_exactly() {
        let docs = vec![Document::new("big.md", "y".repeat(150_000), "/d/big.md")];
        let context = build_context(&docs);

        let body = context.strip_suffix(TRUNCATION_MARKER).unwrap_or_default();
        assert_eq!(body.chars().count(), MAX_CONTEXT_CHARS);
        assert!(body.starts_with("\n=== filename: big.md ===\n\n"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let docs = vec![Document::new("cjk.md", "命令".repeat(60_000), "/d/cjk.md")];
        let context = build_context(&docs);

        let body = context.strip_suffix(TRUNCATION_MARKER).unwrap_or_default();
        assert_eq!(body.chars().count(), MAX_CONTEXT_CHARS);
    }

    #[test]
    fn test_exact_limit_is_not_truncated() {
        let banner = "\n=== filename: a ===\n\n".chars().count() + 2;
        let docs = vec![Document::new("a", "z".repeat(MAX_CONTEXT_CHARS - banner), "/d/a")];
        let context = build_context(&docs);

        assert_eq!(context.chars().count(), MAX_CONTEXT_CHARS);
        assert!(!context.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_messages() {
        let messages = build_messages("CTX", "list network commands");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(
            messages[1].content,
            "Here is the full document content:\nCTX\n\nMy instruction is: list network commands"
        );
    }
}
