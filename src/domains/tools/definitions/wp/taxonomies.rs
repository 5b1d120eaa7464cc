//! WordPress taxonomy tools.
//!
//! Categories and tags share the same parameter shape and term projection;
//! only the route differs.

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
use crate::domains::tools::definitions::normalize::{normalize_list, term_summary};

/// Parameters shared by the category and tag listing tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpListTermsParams {
    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[schemars(description = "Limit results to terms matching a search term")]
    #[serde(default)]
    pub search: Option<String>,

    #[schemars(description = "Whether to hide terms not assigned to any content")]
    #[serde(default)]
    pub hide_empty: Option<bool>,
}

async fn list_terms(
    path: &'static str,
    params: &WpListTermsParams,
    ctx: &WpContext,
) -> Result<Value, WpError> {
    validate_paging(params.page, params.per_page)?;

    let query = Query::new()
        .set_opt("page", params.page.as_ref())
        .set_opt("per_page", params.per_page.as_ref())
        .set_opt("search", params.search.as_ref())
        .set_opt("hide_empty", params.hide_empty.as_ref());

    let raw = ctx.client.get(path, query).await?;
    Ok(normalize_list(&raw, term_summary))
}

/// List categories tool.
pub struct WpListCategoriesTool;

impl WpListCategoriesTool {
    pub const NAME: &'static str = "wp_list_categories";

    pub const DESCRIPTION: &'static str = "List WordPress categories. Returns id, name, slug, description, parent, and assigned-content count per term.";

    pub async fn execute(params: &WpListTermsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(
            ctx,
            "listing categories",
            &WP_HINTS,
            list_terms("wp/v2/categories", params, ctx),
        )
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListTermsParams>(),
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
                let params: WpListTermsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// List tags tool.
pub struct WpListTagsTool;

impl WpListTagsTool {
    pub const NAME: &'static str = "wp_list_tags";

    pub const DESCRIPTION: &'static str = "List WordPress tags. Returns id, name, slug, description, parent, and assigned-content count per term.";

    pub async fn execute(params: &WpListTermsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(
            ctx,
            "listing tags",
            &WP_HINTS,
            list_terms("wp/v2/tags", params, ctx),
        )
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListTermsParams>(),
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
                let params: WpListTermsParams = serde_json::from_value(Value::Object(args))
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
    fn test_term_params_all_optional() {
        let params: WpListTermsParams = serde_json::from_str("{}").unwrap();
        assert!(params.page.is_none());
        assert!(params.hide_empty.is_none());
    }

    #[tokio::test]
    async fn test_per_page_out_of_bounds_is_rejected() {
        let (ctx, _log) = test_ctx();
        let params: WpListTermsParams =
            serde_json::from_str(r#"{"per_page": 250}"#).unwrap();
        let result = WpListCategoriesTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("'per_page'"));
    }
}
