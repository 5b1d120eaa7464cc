//! WordPress comment tools.

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
use crate::domains::tools::definitions::common::{WP_HINTS, run_tool, validate_paging};
use crate::domains::tools::definitions::normalize::{comment_summary, normalize_list};

/// Parameters for the list comments tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpListCommentsParams {
    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[schemars(description = "Limit results to comments matching a search term")]
    #[serde(default)]
    pub search: Option<String>,

    #[schemars(description = "Limit results to comments on this post ID")]
    #[serde(default)]
    pub post: Option<u64>,

    #[schemars(description = "Comment status to filter by (e.g. 'approve', 'hold', 'spam')")]
    #[serde(default)]
    pub status: Option<String>,
}

/// List comments tool.
pub struct WpListCommentsTool;

impl WpListCommentsTool {
    pub const NAME: &'static str = "wp_list_comments";

    pub const DESCRIPTION: &'static str = "List WordPress comments. Supports pagination, search, and filtering by post and status. Rendered comment content is unwrapped to a plain string.";

    pub async fn execute(params: &WpListCommentsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing comments", &WP_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &WpListCommentsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_paging(params.page, params.per_page)?;

        let query = Query::new()
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref())
            .set_opt("search", params.search.as_ref())
            .set_opt("post", params.post.as_ref())
            .set_opt("status", params.status.as_ref());

        let raw = ctx.client.get("wp/v2/comments", query).await?;
        Ok(normalize_list(&raw, comment_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListCommentsParams>(),
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
                let params: WpListCommentsParams = serde_json::from_value(Value::Object(args))
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

    #[test]
    fn test_comment_params_post_filter() {
        let params: WpListCommentsParams =
            serde_json::from_str(r#"{"post": 42, "status": "approve"}"#).unwrap();
        assert_eq!(params.post, Some(42));
        assert_eq!(params.status.as_deref(), Some("approve"));
    }
}
