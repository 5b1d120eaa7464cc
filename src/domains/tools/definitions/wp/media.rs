//! WordPress media library tools.

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
    WP_HINTS, run_tool, validate_enum_opt, validate_paging,
};
use crate::domains::tools::definitions::normalize::{media_summary, normalize_list};

const MEDIA_TYPES: &[&str] = &["image", "video", "audio", "application", "text"];

/// Parameters for the list media tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpListMediaParams {
    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[schemars(description = "Limit results to attachments matching a search term")]
    #[serde(default)]
    pub search: Option<String>,

    #[schemars(description = "Media type: 'image', 'video', 'audio', 'application', or 'text'")]
    #[serde(default)]
    pub media_type: Option<String>,
}

/// List media tool.
pub struct WpListMediaTool;

impl WpListMediaTool {
    pub const NAME: &'static str = "wp_list_media";

    pub const DESCRIPTION: &'static str = "List WordPress media library attachments. Supports pagination, search, and filtering by media type. Returns source URLs and alt text.";

    pub async fn execute(params: &WpListMediaParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing media", &WP_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &WpListMediaParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_paging(params.page, params.per_page)?;
        validate_enum_opt("media_type", params.media_type.as_ref(), MEDIA_TYPES)?;

        let query = Query::new()
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref())
            .set_opt("search", params.search.as_ref())
            .set_opt("media_type", params.media_type.as_ref());

        let raw = ctx.client.get("wp/v2/media", query).await?;
        Ok(normalize_list(&raw, media_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListMediaParams>(),
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
                let params: WpListMediaParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// Parameters for the get media tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpGetMediaParams {
    #[schemars(description = "ID of the attachment to fetch")]
    pub media_id: u64,
}

/// Get media tool.
pub struct WpGetMediaTool;

impl WpGetMediaTool {
    pub const NAME: &'static str = "wp_get_media";

    pub const DESCRIPTION: &'static str =
        "Fetch a single media library attachment by ID and return its summary.";

    pub async fn execute(params: &WpGetMediaParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "fetching media", &WP_HINTS, Self::fetch(params, ctx)).await
    }

    async fn fetch(params: &WpGetMediaParams, ctx: &WpContext) -> Result<Value, WpError> {
        let path = format!("wp/v2/media/{}", params.media_id);
        let raw = ctx.client.get(&path, Query::new()).await?;
        Ok(media_summary(&raw))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpGetMediaParams>(),
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
                let params: WpGetMediaParams = serde_json::from_value(Value::Object(args))
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

    #[tokio::test]
    async fn test_media_type_outside_closed_set_is_rejected() {
        let (ctx, _log) = test_ctx();
        let params: WpListMediaParams =
            serde_json::from_str(r#"{"media_type": "hologram"}"#).unwrap();
        let result = WpListMediaTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("'media_type'"));
    }

    #[test]
    fn test_get_media_requires_id() {
        let missing: Result<WpGetMediaParams, _> = serde_json::from_str("{}");
        assert!(missing.is_err());
    }
}
