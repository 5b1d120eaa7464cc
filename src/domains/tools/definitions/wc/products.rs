//! WooCommerce product tools.
//!
//! List, fetch, and search products through the `wc/v3/products` routes.
//! Product summaries split the meta list into user-facing `custom_meta`
//! and the unfiltered `meta_data_all`.

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
    WC_HINTS, default_per_page, run_tool, validate_enum_opt, validate_paging, validate_required,
};
use crate::domains::tools::definitions::normalize::{normalize_list, product_summary};

const PRODUCT_TYPES: &[&str] = &["simple", "grouped", "external", "variable"];
const STOCK_STATUSES: &[&str] = &["instock", "outofstock", "onbackorder"];

// ============================================================================
// List products
// ============================================================================

/// Parameters for the list products tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WcListProductsParams {
    #[schemars(description = "Page of the collection (default: 1)")]
    #[serde(default)]
    pub page: Option<u32>,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,

    #[schemars(description = "Limit results to products matching a search term")]
    #[serde(default)]
    pub search: Option<String>,

    #[schemars(description = "Limit results to products in this category ID")]
    #[serde(default)]
    pub category: Option<String>,

    #[schemars(description = "Limit results to products with this tag ID")]
    #[serde(default)]
    pub tag: Option<String>,

    #[schemars(description = "Product status (e.g. 'publish', 'draft', 'pending', 'private')")]
    #[serde(default)]
    pub status: Option<String>,

    /// Product type filter.
    #[schemars(description = "Product type: 'simple', 'grouped', 'external', or 'variable'")]
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,

    #[schemars(description = "Limit results to products with this SKU")]
    #[serde(default)]
    pub sku: Option<String>,

    #[schemars(description = "Limit results to featured products")]
    #[serde(default)]
    pub featured: Option<bool>,

    #[schemars(description = "Limit results to products currently on sale")]
    #[serde(default)]
    pub on_sale: Option<bool>,

    #[schemars(description = "Minimum price filter")]
    #[serde(default)]
    pub min_price: Option<String>,

    #[schemars(description = "Maximum price filter")]
    #[serde(default)]
    pub max_price: Option<String>,

    #[schemars(description = "Stock status: 'instock', 'outofstock', or 'onbackorder'")]
    #[serde(default)]
    pub stock_status: Option<String>,

    #[schemars(description = "Sort direction: 'asc' or 'desc'")]
    #[serde(default)]
    pub order: Option<String>,

    #[schemars(description = "Field to sort by (e.g. 'date', 'title', 'price', 'popularity')")]
    #[serde(default)]
    pub orderby: Option<String>,
}

/// List products tool.
pub struct WcListProductsTool;

impl WcListProductsTool {
    pub const NAME: &'static str = "wc_list_products";

    pub const DESCRIPTION: &'static str = "List WooCommerce products. Supports pagination, search, and filtering by category, tag, status, type, SKU, featured/on-sale flags, price range, and stock status. Each product summary includes custom_meta (meta keys without the internal underscore prefix) and the unfiltered meta_data_all list.";

    pub async fn execute(params: &WcListProductsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "listing products", &WC_HINTS, Self::list(params, ctx)).await
    }

    async fn list(params: &WcListProductsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_paging(params.page, params.per_page)?;
        validate_enum_opt("type", params.product_type.as_ref(), PRODUCT_TYPES)?;
        validate_enum_opt("stock_status", params.stock_status.as_ref(), STOCK_STATUSES)?;
        validate_enum_opt("order", params.order.as_ref(), &["asc", "desc"])?;

        let query = Query::new()
            .set_opt("page", params.page.as_ref())
            .set_opt("per_page", params.per_page.as_ref())
            .set_opt("search", params.search.as_ref())
            .set_opt("category", params.category.as_ref())
            .set_opt("tag", params.tag.as_ref())
            .set_opt("status", params.status.as_ref())
            .set_opt("type", params.product_type.as_ref())
            .set_opt("sku", params.sku.as_ref())
            .set_opt("featured", params.featured.as_ref())
            .set_opt("on_sale", params.on_sale.as_ref())
            .set_opt("min_price", params.min_price.as_ref())
            .set_opt("max_price", params.max_price.as_ref())
            .set_opt("stock_status", params.stock_status.as_ref())
            .set_opt("order", params.order.as_ref())
            .set_opt("orderby", params.orderby.as_ref());

        let raw = ctx.client.get("wc/v3/products", query).await?;
        Ok(normalize_list(&raw, product_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WcListProductsParams>(),
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
                let params: WcListProductsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Get product
// ============================================================================

/// Parameters for the get product tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WcGetProductParams {
    #[schemars(description = "ID of the product to fetch")]
    pub product_id: u64,
}

/// Get product tool.
pub struct WcGetProductTool;

impl WcGetProductTool {
    pub const NAME: &'static str = "wc_get_product";

    pub const DESCRIPTION: &'static str = "Fetch a single WooCommerce product by ID. Returns the full product summary including pricing, stock, taxonomy references, custom_meta, and the ACF blob when present.";

    pub async fn execute(params: &WcGetProductParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "fetching product", &WC_HINTS, Self::fetch(params, ctx)).await
    }

    async fn fetch(params: &WcGetProductParams, ctx: &WpContext) -> Result<Value, WpError> {
        let path = format!("wc/v3/products/{}", params.product_id);
        let raw = ctx.client.get(&path, Query::new()).await?;
        Ok(product_summary(&raw))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WcGetProductParams>(),
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
                let params: WcGetProductParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Search products
// ============================================================================

/// Parameters for the search products tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WcSearchProductsParams {
    #[schemars(description = "Search term to match against product names and descriptions")]
    pub search: String,

    #[schemars(description = "Items per page, 1-100 (default: 10)")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Search products tool.
pub struct WcSearchProductsTool;

impl WcSearchProductsTool {
    pub const NAME: &'static str = "wc_search_products";

    pub const DESCRIPTION: &'static str =
        "Search WooCommerce products by a mandatory search term. Returns up to per_page product summaries (default 10).";

    pub async fn execute(params: &WcSearchProductsParams, ctx: &WpContext) -> CallToolResult {
        run_tool(ctx, "searching products", &WC_HINTS, Self::search(params, ctx)).await
    }

    async fn search(params: &WcSearchProductsParams, ctx: &WpContext) -> Result<Value, WpError> {
        validate_required("search", &params.search)?;
        validate_paging(None, params.per_page)?;
        let per_page = params.per_page.unwrap_or_else(default_per_page);

        let query = Query::new()
            .set("search", &params.search)
            .set("per_page", per_page);

        let raw = ctx.client.get("wc/v3/products", query).await?;
        Ok(normalize_list(&raw, product_summary))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WcSearchProductsParams>(),
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
                let params: WcSearchProductsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}
