//! WooCommerce product variation tools.

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

use crate::core::wp::{Query, WpContext, WpError};
use crate::domains::tools::definitions::common::{WC_HINTS, run_tool, validate_paging};
use crate::domains::tools::definitions::normalize::variation_summary;

/// Parameters for the list variations tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WcListVariationsParams {
    #[schemars(description = "ID of the parent product")]
    pub product_id: u64,

    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// List variations tool.
pub struct WcListVariationsTool;

impl WcListVariationsTool {
    pub const NAME: &'static str = "wc_list_variations";

    pub const DESCRIPTION: &'static str = "List the variations of a variable WooCommerce product. Returns the parent product ID, a variation count, and one summary per variation with its own custom_meta.";

    pub async fn execute(params: &WcListVariationsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing variations", &WC_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &WcListVariationsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_paging(params.page, params.per_page)?;

        let query = Query::new()
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref());

        let path = format!("wc/v3/products/{}/variations", params.product_id);
        let raw = ctx.client.get(&path, query).await?;

        // Non-array bodies pass through unchanged rather than being wrapped.
        Ok(match raw.as_array() {
            Some(items) => json!({
                "product_id": params.product_id,
                "variations_count": items.len(),
                "variations": items.iter().map(variation_summary).collect::<Vec<_>>(),
            }),
            None => raw,
        })
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WcListVariationsParams>(),
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
                let params: WcListVariationsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// Parameters for the get variation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WcGetVariationParams {
    #[schemars(description = "ID of the parent product")]
    pub product_id: u64,

    #[schemars(description = "ID of the variation to fetch")]
    pub variation_id: u64,
}

/// Get variation tool.
pub struct WcGetVariationTool;

impl WcGetVariationTool {
    pub const NAME: &'static str = "wc_get_variation";

    pub const DESCRIPTION: &'static str =
        "Fetch a single variation of a WooCommerce product and return its summary.";

    pub async fn execute(params: &WcGetVariationParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "fetching variation", &WC_HINTS, Self::fetch(params, ctx)).await
    }

    async fn fetch(params: &WcGetVariationParams, ctx: &WpContext) -> Result<Value, WpError> {
        let path = format!(
            "wc/v3/products/{}/variations/{}",
            params.product_id, params.variation_id
        );
        let raw = ctx.client.get(&path, Query::new()).await?;
        Ok(variation_summary(&raw))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WcGetVariationParams>(),
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
                let params: WcGetVariationParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
