//! MCP server implementation for docsift

use std::sync::Arc;

use docsift_core::{Config, ContentService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData, ServerHandler, tool, tool_handler, tool_router};

use crate::error::{McpError, McpResult};
use crate::tools::{GetFileContentParams, OrganizeContentParams, SearchContentParams, tool_reply};

const INSTRUCTIONS: &str = "docsift searches a folder of Markdown command notes. Use \
'search_content' for keyword lookups, 'list_commands' for an overview, 'get_file_content' \
to read a whole file, and 'organize_content' to have the model summarize or extract from \
every document.";

/// MCP server for docsift
#[derive(Clone)]
pub struct McpServer {
    service: Arc<ContentService>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server from configuration, using the HTTP model gateway
    pub fn new(config: &Config) -> McpResult<Self> {
        let service = ContentService::from_config(config)?;
        Ok(Self::with_service(service))
    }

    /// Create a server around an existing service
    pub fn with_service(service: ContentService) -> Self {
        Self {
            service: Arc::new(service),
            tool_router: Self::tool_router(),
        }
    }

    /// Serve the MCP protocol over stdio
    pub async fn serve_stdio(&self) -> McpResult<()> {
        tracing::info!(root = %self.service.root().display(), "docsift MCP server starting");

        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();

        let service = rmcp::serve_server(self.clone(), (stdin, stdout))
            .await
            .map_err(|e| {
                tracing::error!("server initialization error: {}", e);
                McpError::Protocol(e.to_string())
            })?;

        // Keep the service running until the client disconnects
        service.waiting().await.map_err(|e| {
            tracing::error!("server runtime error: {}", e);
            McpError::Protocol(e.to_string())
        })?;

        tracing::info!("docsift MCP server stopped");
        Ok(())
    }
}

#[tool_router]
impl McpServer {
    /// Keyword search over command blocks
    #[tool(
        description = "Search the documents in the data directory for commands or content by keyword. Matches titles, commands, sections and descriptions and returns the most relevant results."
    )]
    pub async fn search_content(
        &self,
        Parameters(params): Parameters<SearchContentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let outcome = self.service.search_content(&params.query).await;
        Ok(tool_reply(outcome, "Search failed"))
    }

    /// Grouped listing of every command
    #[tool(
        description = "List the commands and a content summary of every document in the data directory."
    )]
    pub async fn list_commands(&self) -> Result<CallToolResult, ErrorData> {
        let outcome = self.service.list_commands().await;
        Ok(tool_reply(outcome, "Listing commands failed"))
    }

    /// Whole-file retrieval
    #[tool(description = "Get the full content of a file in the data directory.")]
    pub async fn get_file_content(
        &self,
        Parameters(params): Parameters<GetFileContentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let outcome = self.service.get_file_content(&params.filename).await;
        Ok(tool_reply(outcome, "Reading file failed"))
    }

    /// Model-backed summarization
    #[tool(
        description = "Use a large language model to organize, summarize or extract specific content from the documents, e.g. 'list every network configuration command' or 'summarize the WSL installation steps'."
    )]
    pub async fn organize_content(
        &self,
        Parameters(params): Parameters<OrganizeContentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let outcome = self.service.organize_content(&params.instruction).await;
        Ok(tool_reply(outcome, "Organizing content failed"))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "docsift-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}
