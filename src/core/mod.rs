//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the WordPress API client, the
//! request log side channel, server lifecycle management, and the stdio
//! transport.

pub mod config;
pub mod error;
pub mod log;
pub mod server;
pub mod transport;
pub mod wp;

pub use config::Config;
pub use error::{Error, Result};
pub use log::{FileToolLog, NullToolLog, ToolLog};
pub use server::McpServer;
pub use transport::StdioTransport;
pub use wp::{Payload, Query, WpClient, WpContext, WpError};
