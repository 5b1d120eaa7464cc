//! WordPress post tools.
//!
//! List, fetch, and search posts through the `wp/v2/posts` routes.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::wp::{Query, WpContext, WpError};
use crate::domains::tools::definitions::common::{
    WP_HINTS, default_per_page, run_tool, validate_enum_opt, validate_paging, validate_required,
};
use crate::domains::tools::definitions::normalize::{normalize_list, post_summary};

// ============================================================================
// List posts
// ============================================================================

/// Parameters for the list posts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpListPostsParams {
    /// Page of results to fetch.
    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    /// Results per page, 1-100.
    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[schemars(description = "Limit results to those matching a search term")]
    #[serde(default)]
    pub search: Option<String>,

    #[schemars(description = "Limit results to posts with this status (e.g. 'publish', 'draft')")]
    #[serde(default)]
    pub status: Option<String>,

    #[schemars(description = "Limit results to posts by this author ID")]
    #[serde(default)]
    pub author: Option<u32>,

    #[schemars(description = "Comma-separated category IDs to filter by")]
    #[serde(default)]
    pub categories: Option<String>,

    #[schemars(description = "Comma-separated tag IDs to filter by")]
    #[serde(default)]
    pub tags: Option<String>,

    #[schemars(description = "Sort direction: 'asc' or 'desc'")]
    #[serde(default)]
    pub order: Option<String>,

    #[schemars(description = "Field to sort by (e.g. 'date', 'title', 'modified')")]
    #[serde(default)]
    pub orderby: Option<String>,
}

/// List posts tool.
pub struct WpListPostsTool;

impl WpListPostsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "wp_list_posts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List WordPress posts. Supports pagination, search, and filtering by status, author, categories, and tags. Returns post summaries with rendered titles unwrapped to plain strings.";

    /// Execute the tool logic.
    pub async fn execute(params: &WpListPostsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing posts", &WP_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &WpListPostsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_paging(params.page, params.per_page)?;
        validate_enum_opt("order", params.order.as_ref(), &["asc", "desc"])?;

        let query = Query::new()
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref())
            .set_opt("search", params.search.as_ref())
            .set_opt("status", params.status.as_ref())
            .set_opt("author", params.author.as_ref())
            .set_opt("categories", params.categories.as_ref())
            .set_opt("tags", params.tags.as_ref())
            .set_opt("order", params.order.as_ref())
            .set_opt("orderby", params.orderby.as_ref());

        let raw = ctx.client.get("wp/v2/posts", query).await?;
        Ok(normalize_list(&raw, post_summary))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListPostsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(ctx: Arc<WpContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |tcc: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = tcc.arguments.clone().unwrap_or_default();
            async move {
                let params: WpListPostsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Get post
// ============================================================================

/// Parameters for the get post tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpGetPostParams {
    #[schemars(description = "ID of the post to fetch")]
    pub post_id: u64,
}

/// Get post tool.
pub struct WpGetPostTool;

impl WpGetPostTool {
    pub const NAME: &'static str = "wp_get_post";

    pub const DESCRIPTION: &'static str =
        "Fetch a single WordPress post by ID and return its summary.";

    pub async fn execute(params: &WpGetPostParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "fetching post", &WP_HINTS, Self::fetch(params, ctx)).await
    }

    async fn fetch(params: &WpGetPostParams, ctx: &WpContext) -> Result<Value, WpError> {
        let path = format!("wp/v2/posts/{}", params.post_id);
        let raw = ctx.client.get(&path, Query::new()).await?;
        Ok(post_summary(&raw))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpGetPostParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(ctx: Arc<WpContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |tcc: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = tcc.arguments.clone().unwrap_or_default();
            async move {
                let params: WpGetPostParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Search posts
// ============================================================================

/// Parameters for the search posts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpSearchPostsParams {
    #[schemars(description = "Search term to match against post content")]
    pub search: String,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Search posts tool.
pub struct WpSearchPostsTool;

impl WpSearchPostsTool {
    pub const NAME: &'static str = "wp_search_posts";

    pub const DESCRIPTION: &'static str =
        "Search WordPress posts by a mandatory search term. Returns up to per_page post summaries (default 10).";

    pub async fn execute(params: &WpSearchPostsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "searching posts", &WP_HINTS, Self::search(params, ctx)).await
    }

    async fn search(params: &WpSearchPostsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_required("search", &params.search)?;
        validate_paging(None, params.per_page)?;
        let per_page = params.per_page.unwrap_or_else(default_per_page);

        let query = Query::new()
            .set("search", &params.search)
            .set("per_page", per_page);

        let raw = ctx.client.get("wp/v2/posts", query).await?;
        Ok(normalize_list(&raw, post_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpSearchPostsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(ctx: Arc<WpContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |tcc: ToolCallContext<'_, S>| {
            let ctx = ctx.clone();
            let args = tcc.arguments.clone().unwrap_or_default();
            async move {
                let params: WpSearchPostsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::tests::{test_ctx, text_of};

    #[test]
    fn test_list_params_all_optional() {
        let params: WpListPostsParams = serde_json::from_str("{}").unwrap();
        assert!(params.page.is_none());
        assert!(params.search.is_none());
    }

    #[test]
    fn test_search_params_default_per_page() {
        let params: WpSearchPostsParams =
            serde_json::from_str(r#"{"search": "soap"}"#).unwrap();
        assert!(params.per_page.is_none());
        assert_eq!(params.per_page.unwrap_or_else(default_per_page), 10);
    }

    #[tokio::test]
    async fn test_list_rejects_bad_order_before_any_request() {
        let (ctx, log) = test_ctx();
        let params: WpListPostsParams =
            serde_json::from_str(r#"{"order": "sideways"}"#).unwrap();
        let result = WpListPostsTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("'order'"));
        // Validation failed, but the outcome was still logged once.
        assert_eq!(log.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_rejects_blank_term() {
        let (ctx, _log) = test_ctx();
        let params = WpSearchPostsParams {
            search: "   ".to_string(),
            per_page: None,
        };
        let result = WpSearchPostsTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("'search'"));
    }

    // Integration test (requires a live site, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_list_posts_against_live_site() {
        let config = crate::core::Config::from_env();
        let ctx = WpContext::from_config(&config).unwrap();
        let params: WpListPostsParams = serde_json::from_str(r#"{"per_page": 2}"#).unwrap();
        let result = WpListPostsTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(false));
    }
}
