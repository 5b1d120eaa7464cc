//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tool router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per
//! resource family. Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (validate, request, normalize, wrap)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::wp::WpContext;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the WordPress tool definitions.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the configured site URL or credentials cannot form a
    /// usable API client.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let ctx = Arc::new(WpContext::from_config(&config)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(ctx),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "WordPress MCP server. Provides tools for reading WordPress content \
                 (posts, taxonomies, users, comments, plugins, media), running SQL \
                 queries through the companion plugin, browsing WooCommerce products \
                 and variations, and reading/updating Advanced Custom Fields."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_from_default_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "wordpress-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_server_rejects_bad_site_url() {
        let mut config = Config::default();
        config.site.url = "::: not a url :::".to_string();
        assert!(McpServer::new(config).is_err());
    }
}
