//! Advanced Custom Fields tools.
//!
//! All three tools go through the standard content API: the site embeds an
//! `acf` object in post responses when the ACF REST integration is enabled,
//! and updates are posted as `{"acf": {...}}` to the content route.
//!
//! Content types map to API segments: `post` -> `wp/v2/posts`, `page` ->
//! `wp/v2/pages`; any other slug is used as a segment unchanged, which covers
//! custom post types exposed in the REST API.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

use crate::core::wp::{Query, WpContext, WpError};
use crate::domains::tools::definitions::common::{
    ACF_HINTS, run_tool, validate_paging, validate_required,
};
use crate::domains::tools::definitions::normalize::acf_item_summary;

/// Map a logical content type slug to its REST API segment.
fn content_segment(content_type: &str) -> String {
    match content_type {
        "post" => "wp/v2/posts".to_string(),
        "page" => "wp/v2/pages".to_string(),
        other => format!("wp/v2/{}", other),
    }
}

/// Extract the ACF blob from a content response.
fn extract_acf(raw: &Value) -> Result<Value, WpError> {
    match raw.get("acf") {
        Some(acf) if !acf.is_null() => Ok(acf.clone()),
        _ => Err(WpError::missing(
            "no ACF field data in the response for this content item",
        )),
    }
}

// ============================================================================
// Get ACF fields
// ============================================================================

/// Parameters for the get ACF fields tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAcfFieldsParams {
    #[schemars(description = "Content type: 'post', 'page', or a custom post type slug")]
    pub content_type: String,

    #[schemars(description = "ID of the content item")]
    pub content_id: u64,
}

/// Get ACF fields tool.
pub struct GetAcfFieldsTool;

impl GetAcfFieldsTool {
    pub const NAME: &'static str = "get_acf_fields";

    pub const DESCRIPTION: &'static str = "Read the Advanced Custom Fields values attached to a content item. The field group must have 'Show in REST API' enabled.";

    pub async fn execute(params: &GetAcfFieldsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "fetching ACF fields", &ACF_HINTS, Self::fetch(params, ctx)).await
    }

    async fn fetch(params: &GetAcfFieldsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_required("content_type", &params.content_type)?;

        let path = format!(
            "{}/{}",
            content_segment(&params.content_type),
            params.content_id
        );
        let raw = ctx.client.get(&path, Query::new()).await?;
        let fields = extract_acf(&raw)?;

        Ok(json!({
            "content_type": params.content_type,
            "content_id": params.content_id,
            "fields": fields,
        }))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAcfFieldsParams>(),
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
                let params: GetAcfFieldsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Update ACF fields
// ============================================================================

/// Parameters for the update ACF fields tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateAcfFieldsParams {
    #[schemars(description = "Content type: 'post', 'page', or a custom post type slug")]
    pub content_type: String,

    #[schemars(description = "ID of the content item")]
    pub content_id: u64,

    /// Open key-value map of field values; values may be any JSON.
    #[schemars(description = "Map of ACF field names to their new values")]
    pub fields: Map<String, Value>,
}

/// Update ACF fields tool.
pub struct UpdateAcfFieldsTool;

impl UpdateAcfFieldsTool {
    pub const NAME: &'static str = "update_acf_fields";

    pub const DESCRIPTION: &'static str = "Update Advanced Custom Fields values on a content item. Fields are sent as a single 'acf' object to the content route; the response echoes the stored values.";

    pub async fn execute(params: &UpdateAcfFieldsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "updating ACF fields", &ACF_HINTS, Self::update(params, ctx)).await
    }

    async fn update(params: &UpdateAcfFieldsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_required("content_type", &params.content_type)?;
        if params.fields.is_empty() {
            return Err(WpError::validation(
                "fields",
                "must contain at least one field",
            ));
        }

        let path = format!(
            "{}/{}",
            content_segment(&params.content_type),
            params.content_id
        );
        let body = json!({"acf": params.fields});
        let raw = ctx.client.post(&path, body).await?;
        let fields = extract_acf(&raw)?;

        Ok(json!({
            "content_type": params.content_type,
            "content_id": params.content_id,
            "fields": fields,
        }))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateAcfFieldsParams>(),
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
                let params: UpdateAcfFieldsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// List content with ACF fields
// ============================================================================

/// Parameters for the list ACF content fields tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListAcfContentFieldsParams {
    #[schemars(description = "Content type: 'post', 'page', or a custom post type slug")]
    pub content_type: String,

    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// List ACF content fields tool.
pub struct ListAcfContentFieldsTool;

impl ListAcfContentFieldsTool {
    pub const NAME: &'static str = "list_acf_content_fields";

    pub const DESCRIPTION: &'static str = "List content items of a type with their ACF field values. Requests only id, title, slug, and the acf blob to keep payloads small; titles are unwrapped to plain strings.";

    pub async fn execute(params: &ListAcfContentFieldsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing ACF content", &ACF_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &ListAcfContentFieldsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_required("content_type", &params.content_type)?;
        validate_paging(params.page, params.per_page)?;

        // Restrict the upstream payload to the fields we project.
        let query = Query::new()
            .set("_fields", "id,title,slug,acf")
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref());

        let segment = content_segment(&params.content_type);
        let raw = ctx.client.get(&segment, query).await?;

        Ok(match raw.as_array() {
            Some(items) => json!({
                "content_type": params.content_type,
                "count": items.len(),
                "items": items.iter().map(acf_item_summary).collect::<Vec<_>>(),
            }),
            None => raw,
        })
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListAcfContentFieldsParams>(),
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
                let params: ListAcfContentFieldsParams =
                    serde_json::from_value(Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
