//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server. This server exposes a single domain: tools proxying the WordPress
//! REST API.

pub mod tools;
