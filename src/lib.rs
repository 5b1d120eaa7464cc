//! WordPress MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that proxies
//! requests to a WordPress site's REST API, including the WooCommerce and
//! Advanced Custom Fields (ACF) extensions.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the WordPress API client, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients, one family per
//!     WordPress resource (posts, taxonomies, users, comments, plugins, media,
//!     SQL, WooCommerce products/variations, ACF fields)
//!
//! # Example
//!
//! ```rust,no_run
//! use wordpress_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
