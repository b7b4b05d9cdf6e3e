//! Parameters and reply shaping for the docsift MCP tools

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::error::McpError;

/// Parameters for the `search_content` tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchContentParams {
    /// Search keywords
    #[schemars(
        description = "Search keywords: a command name, a description of what it does, or any related words"
    )]
    pub query: String,
}

/// Parameters for the `get_file_content` tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetFileContentParams {
    /// File name to read
    #[schemars(description = "Name of the file to read, for example: WSL.md")]
    pub filename: String,
}

/// Parameters for the `organize_content` tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct OrganizeContentParams {
    /// Free-form instruction for the model
    #[schemars(description = "Instruction for organizing or querying the document content")]
    pub instruction: String,
}

/// Turn an operation outcome into a tool reply.
///
/// Failures are reported as error-flagged text prefixed with `failure_label`
/// rather than as protocol errors, so the calling agent always gets a readable
/// message.
pub fn tool_reply(outcome: docsift_core::Result<String>, failure_label: &str) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            let category = err.category();
            let recoverable = err.is_recoverable();
            let err = McpError::from(err);
            tracing::warn!(
                category,
                recoverable,
                code = err.error_code(),
                error = %err,
                "{failure_label}"
            );
            CallToolResult::error(vec![Content::text(format!("{failure_label}: {err}"))])
        },
    }
}
