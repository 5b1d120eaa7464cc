//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool follows the same shape: validate parameters, issue one request
//! through the WordPress client, normalize the response, wrap in the uniform
//! text envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, one file per resource family
//! - `router.rs` - Dynamic ToolRouter builder for the stdio transport
//! - `registry.rs` - Central tool metadata registry
//!
//! ## Adding a New Tool
//!
//! 1. Create or extend a family file in `definitions/`
//! 2. Define params, execute(), to_tool(), and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
