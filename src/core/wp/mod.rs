//! WordPress REST API collaborator.
//!
//! This module owns everything that touches the remote site: the generic
//! request client, the error taxonomy for upstream failures, and the shared
//! per-tool context (client + request log) handed to every tool route.

mod client;
mod error;

pub use client::{Payload, Query, WpClient};
pub use error::WpError;

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::log::{FileToolLog, NullToolLog, ToolLog};
use crate::core::Result;

/// Shared collaborators for tool execution.
///
/// Cheap to clone behind an `Arc`; one instance is built at server startup
/// and cloned into every tool route.
pub struct WpContext {
    /// Client for the site's REST API.
    pub client: WpClient,

    /// Fire-and-forget request log.
    pub log: Arc<dyn ToolLog>,
}

impl WpContext {
    /// Build the context from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = WpClient::new(&config.site)?;
        let log: Arc<dyn ToolLog> = match &config.site.request_log {
            Some(path) => Arc::new(FileToolLog::new(path.clone())),
            None => Arc::new(NullToolLog),
        };
        Ok(Self { client, log })
    }
}
