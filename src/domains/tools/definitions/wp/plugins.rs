//! WordPress plugin tools.

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
use crate::domains::tools::definitions::common::{PLUGIN_HINTS, run_tool};
use crate::domains::tools::definitions::normalize::{normalize_list, plugin_summary};

/// Parameters for the list plugins tool. The route takes no filters.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpListPluginsParams {}

/// List plugins tool.
pub struct WpListPluginsTool;

impl WpListPluginsTool {
    pub const NAME: &'static str = "wp_list_plugins";

    pub const DESCRIPTION: &'static str = "List installed WordPress plugins with their activation status and version. Requires an administrator application password and WordPress 5.5+.";

    pub async fn execute(_params: &WpListPluginsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing plugins", &PLUGIN_HINTS, Self::list(ctx)).await
    }

    async fn list(ctx: &WpContext) -> Result<Value, WpError> {
        let raw = ctx.client.get("wp/v2/plugins", Query::new()).await?;
        Ok(normalize_list(&raw, plugin_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListPluginsParams>(),
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
                let params: WpListPluginsParams = serde_json::from_value(Value::Object(args))
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
    fn test_plugin_params_accept_empty_object() {
        let params: Result<WpListPluginsParams, _> = serde_json::from_str("{}");
        assert!(params.is_ok());
    }
}
