//! WordPress user tools.

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
use crate::domains::tools::definitions::normalize::{normalize_list, user_summary};

/// Parameters for the list users tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpListUsersParams {
    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[schemars(description = "Limit results to users matching a search term")]
    #[serde(default)]
    pub search: Option<String>,

    #[schemars(description = "Comma-separated role slugs to filter by (e.g. 'author,editor')")]
    #[serde(default)]
    pub roles: Option<String>,
}

/// List users tool.
pub struct WpListUsersTool;

impl WpListUsersTool {
    pub const NAME: &'static str = "wp_list_users";

    pub const DESCRIPTION: &'static str = "List WordPress users. Supports pagination, search, and filtering by role. Requires an authenticated application password.";

    pub async fn execute(params: &WpListUsersParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing users", &WP_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &WpListUsersParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_paging(params.page, params.per_page)?;

        let query = Query::new()
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref())
            .set_opt("search", params.search.as_ref())
            .set_opt("roles", params.roles.as_ref());

        let raw = ctx.client.get("wp/v2/users", query).await?;
        Ok(normalize_list(&raw, user_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpListUsersParams>(),
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
                let params: WpListUsersParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

/// Parameters for the get user tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WpGetUserParams {
    #[schemars(description = "ID of the user to fetch")]
    pub user_id: u64,
}

/// Get user tool.
pub struct WpGetUserTool;

impl WpGetUserTool {
    pub const NAME: &'static str = "wp_get_user";

    pub const DESCRIPTION: &'static str =
        "Fetch a single WordPress user by ID and return its summary.";

    pub async fn execute(params: &WpGetUserParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "fetching user", &WP_HINTS, Self::fetch(params, ctx)).await
    }

    async fn fetch(params: &WpGetUserParams, ctx: &WpContext) -> Result<Value, WpError> {
        let path = format!("wp/v2/users/{}", params.user_id);
        let raw = ctx.client.get(&path, Query::new()).await?;
        Ok(user_summary(&raw))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WpGetUserParams>(),
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
                let params: WpGetUserParams = serde_json::from_value(Value::Object(args))
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
    fn test_get_user_requires_id() {
        let missing: Result<WpGetUserParams, _> = serde_json::from_str("{}");
        assert!(missing.is_err());

        let params: WpGetUserParams = serde_json::from_str(r#"{"user_id": 3}"#).unwrap();
        assert_eq!(params.user_id, 3);
    }

    #[test]
    fn test_list_users_roles_filter_optional() {
        let params: WpListUsersParams =
            serde_json::from_str(r#"{"roles": "editor"}"#).unwrap();
        assert_eq!(params.roles.as_deref(), Some("editor"));
    }
}
