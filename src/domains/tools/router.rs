//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only chains them
//! together and hands every route a clone of the shared WordPress context.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::wp::WpContext;

use super::definitions::{
    GetAcfFieldsTool, ListAcfContentFieldsTool, UpdateAcfFieldsTool, WcGetProductTool,
    WcGetVariationTool, WcListProductsTool, WcListVariationsTool, WcSearchProductsTool,
    WpGetMediaTool, WpGetPostTool, WpGetUserTool, WpListCategoriesTool, WpListCommentsTool,
    WpListMediaTool, WpListPluginsTool, WpListPostsTool, WpListTagsTool, WpListUsersTool,
    WpSearchPostsTool, WpSqlQueryTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(ctx: Arc<WpContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(WpListPostsTool::create_route(ctx.clone()))
        .with_route(WpGetPostTool::create_route(ctx.clone()))
        .with_route(WpSearchPostsTool::create_route(ctx.clone()))
        .with_route(WpListCategoriesTool::create_route(ctx.clone()))
        .with_route(WpListTagsTool::create_route(ctx.clone()))
        .with_route(WpListUsersTool::create_route(ctx.clone()))
        .with_route(WpGetUserTool::create_route(ctx.clone()))
        .with_route(WpListCommentsTool::create_route(ctx.clone()))
        .with_route(WpListPluginsTool::create_route(ctx.clone()))
        .with_route(WpListMediaTool::create_route(ctx.clone()))
        .with_route(WpGetMediaTool::create_route(ctx.clone()))
        .with_route(WpSqlQueryTool::create_route(ctx.clone()))
        .with_route(WcListProductsTool::create_route(ctx.clone()))
        .with_route(WcGetProductTool::create_route(ctx.clone()))
        .with_route(WcSearchProductsTool::create_route(ctx.clone()))
        .with_route(WcListVariationsTool::create_route(ctx.clone()))
        .with_route(WcGetVariationTool::create_route(ctx.clone()))
        .with_route(GetAcfFieldsTool::create_route(ctx.clone()))
        .with_route(UpdateAcfFieldsTool::create_route(ctx.clone()))
        .with_route(ListAcfContentFieldsTool::create_route(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::SiteConfig;
    use crate::core::log::NullToolLog;
    use crate::core::wp::WpClient;

    struct TestServer {}

    fn test_ctx() -> Arc<WpContext> {
        Arc::new(WpContext {
            client: WpClient::new(&SiteConfig::default()).unwrap(),
            log: Arc::new(NullToolLog),
        })
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_ctx());
        let tools = router.list_all();
        assert_eq!(tools.len(), 20);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"wp_list_posts"));
        assert!(names.contains(&"wp_sql_query"));
        assert!(names.contains(&"wc_list_products"));
        assert!(names.contains(&"wc_list_variations"));
        assert!(names.contains(&"get_acf_fields"));
        assert!(names.contains(&"update_acf_fields"));
        assert!(names.contains(&"list_acf_content_fields"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_ctx());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
