//! Raw SQL query tool.
//!
//! Proxies a read query to the companion plugin's `wp-mcp/v1/query` route.
//! The response is passed through unchanged; the plugin decides what shape
//! it returns.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::wp::{WpContext, WpError};
use crate::domains::tools::definitions::common::{SQL_HINTS, run_tool, validate_required};

/// Parameters for the SQL query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpSqlQueryParams {
    #[schemars(description = "SQL query to run against the WordPress database")]
    pub query: String,
}

/// SQL query tool.
pub struct WpSqlQueryTool;

impl WpSqlQueryTool {
    pub const NAME: &'static str = "wp_sql_query";

    pub const DESCRIPTION: &'static str = "Run a raw SQL query against the WordPress database through the companion plugin's wp-mcp/v1/query endpoint. The endpoint must be installed and enabled on the site.";

    pub async fn execute(params: &WpSqlQueryParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "running SQL query", &SQL_HINTS, Self::query(params, ctx)).await
    }

    async fn query(params: &WpSqlQueryParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_required("query", &params.query)?;
        ctx.client
            .post("wp-mcp/v1/query", json!({"query": params.query}))
            .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpSqlQueryParams>(),
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
                let params: WpSqlQueryParams = serde_json::from_value(Value::Object(args))
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
    async fn test_empty_query_is_rejected() {
        let (ctx, _log) = test_ctx();
        let params = WpSqlQueryParams {
            query: String::new(),
        };
        let result = WpSqlQueryTool::execute(&params, &ctx).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("'query'"));
    }

    #[test]
    fn test_query_param_is_required() {
        let missing: Result<WpSqlQueryParams, _> = serde_json::from_str("{}");
        assert!(missing.is_err());
    }
}
