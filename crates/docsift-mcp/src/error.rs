//! Error types for the docsift MCP server with MCP error code mapping

use thiserror::Error;

/// Errors that can occur in the MCP server
#[derive(Debug, Error)]
pub enum McpError {
    /// Document service operation failed
    #[error("{0}")]
    Core(#[from] docsift_core::Error),

    /// Protocol error
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl McpError {
    /// Map error to MCP error code
    pub const fn error_code(&self) -> i32 {
        match self {
            Self::Core(docsift_core::Error::NotFound(_)) => -32602, // Invalid params
            Self::Core(_) => -32603,                                // Internal error
            Self::Protocol(_) => -32600,                            // Invalid request
        }
    }
}

/// Result type alias for MCP operations
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            McpError::Core(docsift_core::Error::NotFound("a.md".into())).error_code(),
            -32602
        );
        assert_eq!(
            McpError::Core(docsift_core::Error::CredentialMissing).error_code(),
            -32603
        );
        assert_eq!(McpError::Protocol("closed".into()).error_code(), -32600);
    }

    #[test]
    fn test_core_error_display_is_transparent() {
        let err = McpError::from(docsift_core::Error::Gateway("status 500".into()));
        assert_eq!(err.to_string(), "Model gateway error: status 500");
    }
}
