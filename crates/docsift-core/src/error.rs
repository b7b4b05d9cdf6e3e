//! Error types and handling for docsift-core operations.
//!
//! One error type covers every failure the document service can hit: reading
//! the corpus, loading configuration, and talking to the remote model.
//!
//! ## Error Categories
//!
//! - **Network Errors**: HTTP failures talking to the chat-completions API
//! - **Gateway Errors**: the model API answered, but not with something usable
//! - **Lookup Errors**: a requested file is not part of the corpus
//! - **Configuration Errors**: malformed config files, missing credentials
//!
//! None of these are fatal to the service: the tool layer turns each one into
//! an error-flagged text reply.
//!
//! ```rust
//! use docsift_core::{Error, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(Error::NotFound("wsl.md".to_string()))
//! }
//!
//! match lookup() {
//!     Err(e) => assert_eq!(e.category(), "not_found"),
//!     Ok(()) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// The main error type for docsift-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network operation failed.
    ///
    /// Covers connection failures and transport errors while calling the
    /// chat-completions endpoint. The underlying `reqwest::Error` is preserved.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Invalid TOML syntax in the config file
    /// - Config file path that cannot be read
    /// - Config directory that cannot be determined on this platform
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested document was not found in the corpus.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No API key is configured for the model gateway.
    ///
    /// ## Resolution
    ///
    /// Set `DEEPSEEK_API_KEY` or `gateway.api_key` in the config file.
    #[error("No API key configured for the model gateway; set DEEPSEEK_API_KEY or gateway.api_key")]
    CredentialMissing,

    /// The model API returned a non-success status or an unusable body.
    #[error("Model gateway error: {0}")]
    Gateway(String),

    /// Operation timed out.
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl Error {
    /// Check if the error might be recoverable through a retry.
    ///
    /// The gateway itself never retries; the tool layer logs this so an
    /// operator can tell transient failures from configuration problems.
    ///
    /// ```rust
    /// use docsift_core::Error;
    ///
    /// assert!(Error::Timeout("60s elapsed".to_string()).is_recoverable());
    /// assert!(!Error::CredentialMissing.is_recoverable());
    /// assert!(!Error::NotFound("a.md".to_string()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout(_) => true,
            _ => false,
        }
    }

    /// Get the error category as a static string identifier.
    ///
    /// Used as a structured field when logging failures.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::CredentialMissing => "credential_missing",
            Self::Gateway(_) => "gateway",
            Self::Timeout(_) => "timeout",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
