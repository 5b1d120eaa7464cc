//! Tool Registry - central metadata collection for all tools.
//!
//! This module provides the flat list of tool descriptors (name, description,
//! parameter schema) consumed by hosting processes; dispatch itself happens
//! through the router.

use rmcp::model::Tool;

use super::definitions::{
    GetAcfFieldsTool, ListAcfContentFieldsTool, UpdateAcfFieldsTool, WcGetProductTool,
    WcGetVariationTool, WcListProductsTool, WcListVariationsTool, WcSearchProductsTool,
    WpGetMediaTool, WpGetPostTool, WpGetUserTool, WpListCategoriesTool, WpListCommentsTool,
    WpListMediaTool, WpListPluginsTool, WpListPostsTool, WpListTagsTool, WpListUsersTool,
    WpSearchPostsTool, WpSqlQueryTool,
};

/// Tool registry - the single source of truth for tool metadata.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            WpListPostsTool::NAME,
            WpGetPostTool::NAME,
            WpSearchPostsTool::NAME,
            WpListCategoriesTool::NAME,
            WpListTagsTool::NAME,
            WpListUsersTool::NAME,
            WpGetUserTool::NAME,
            WpListCommentsTool::NAME,
            WpListPluginsTool::NAME,
            WpListMediaTool::NAME,
            WpGetMediaTool::NAME,
            WpSqlQueryTool::NAME,
            WcListProductsTool::NAME,
            WcGetProductTool::NAME,
            WcSearchProductsTool::NAME,
            WcListVariationsTool::NAME,
            WcGetVariationTool::NAME,
            GetAcfFieldsTool::NAME,
            UpdateAcfFieldsTool::NAME,
            ListAcfContentFieldsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            WpListPostsTool::to_tool(),
            WpGetPostTool::to_tool(),
            WpSearchPostsTool::to_tool(),
            WpListCategoriesTool::to_tool(),
            WpListTagsTool::to_tool(),
            WpListUsersTool::to_tool(),
            WpGetUserTool::to_tool(),
            WpListCommentsTool::to_tool(),
            WpListPluginsTool::to_tool(),
            WpListMediaTool::to_tool(),
            WpGetMediaTool::to_tool(),
            WpSqlQueryTool::to_tool(),
            WcListProductsTool::to_tool(),
            WcGetProductTool::to_tool(),
            WcSearchProductsTool::to_tool(),
            WcListVariationsTool::to_tool(),
            WcGetVariationTool::to_tool(),
            GetAcfFieldsTool::to_tool(),
            UpdateAcfFieldsTool::to_tool(),
            ListAcfContentFieldsTool::to_tool(),
        ]
    }
}
