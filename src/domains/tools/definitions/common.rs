//! Common utilities shared across WordPress tools.
//!
//! This module provides parameter validation helpers, the per-family
//! remediation hint tables, and the single envelope wrapper every tool
//! handler runs through.

use std::future::Future;

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::core::wp::{WpContext, WpError};

/// Default number of results for search tools.
pub fn default_per_page() -> u32 {
    10
}

/// Reject a value outside a closed set, naming the offending field.
pub fn validate_enum(
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> Result<(), WpError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(WpError::validation(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ))
    }
}

/// Like [`validate_enum`] but skips absent optional values.
pub fn validate_enum_opt(
    field: &'static str,
    value: Option<&String>,
    allowed: &[&str],
) -> Result<(), WpError> {
    match value {
        Some(v) => validate_enum(field, v, allowed),
        None => Ok(()),
    }
}

/// Validate pagination parameters when provided: `page` >= 1, `per_page` 1-100.
pub fn validate_paging(page: Option<u32>, per_page: Option<u32>) -> Result<(), WpError> {
    if let Some(p) = page {
        if p < 1 {
            return Err(WpError::validation("page", "must be at least 1"));
        }
    }
    if let Some(pp) = per_page {
        if !(1..=100).contains(&pp) {
            return Err(WpError::validation("per_page", "must be between 1 and 100"));
        }
    }
    Ok(())
}

/// Reject an empty required string parameter.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), WpError> {
    if value.trim().is_empty() {
        Err(WpError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Remediation hints appended to error messages, selected by the failure's
/// HTTP status. An empty string means no hint for that case.
pub struct Hints {
    /// Appended on 401/403 responses.
    pub auth: &'static str,
    /// Appended on 404 responses.
    pub not_found: &'static str,
    /// Appended when an expected field is missing from a success response.
    pub missing: &'static str,
}

/// Core WordPress content, taxonomies, users, comments, and media.
pub const WP_HINTS: Hints = Hints {
    auth: "Check that WP_USERNAME and WP_APP_PASSWORD belong to a user with \
           permission to read this resource.",
    not_found: "The item does not exist, or this REST route is not available \
                on the site.",
    missing: "",
};

/// Plugin management routes.
pub const PLUGIN_HINTS: Hints = Hints {
    auth: "Listing plugins requires an application password for an \
           administrator account.",
    not_found: "Plugin management routes require WordPress 5.5 or later.",
    missing: "",
};

/// The raw SQL query endpoint served by the companion plugin.
pub const SQL_HINTS: Hints = Hints {
    auth: "The SQL endpoint requires an application password for an \
           administrator account.",
    not_found: "The SQL query endpoint was not found. Install and activate \
                the companion plugin that exposes wp-mcp/v1/query.",
    missing: "",
};

/// WooCommerce products and variations.
pub const WC_HINTS: Hints = Hints {
    auth: "WooCommerce endpoints require an application password for a user \
           with the manage_woocommerce capability.",
    not_found: "The product or variation does not exist, or WooCommerce is \
                not installed on this site.",
    missing: "",
};

/// Advanced Custom Fields via the standard content API.
pub const ACF_HINTS: Hints = Hints {
    auth: "Check that WP_USERNAME and WP_APP_PASSWORD belong to a user \
           allowed to edit this content type.",
    not_found: "The content item does not exist, or its post type is not \
                exposed in the REST API.",
    missing: "No ACF data in the response. Ensure the Advanced Custom Fields \
              plugin is active and the field group has 'Show in REST API' \
              enabled.",
};

/// Run a tool body and wrap its outcome in the uniform envelope.
///
/// On success the payload is serialized as pretty-printed JSON; on failure the
/// message is `"Error <action>: <underlying message>"` with an optional hint
/// selected from `hints` by the error's status code. Either way the result is
/// a single text content entry, and one line goes to the request log.
pub async fn run_tool<T, F>(
    ctx: &WpContext,
    action: &str,
    hints: &Hints,
    body: F,
) -> CallToolResult
where
    T: Serialize,
    F: Future<Output = Result<T, WpError>>,
{
    match body.await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => {
                ctx.log.write(&format!("{}: ok", action));
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => error_envelope(ctx, format!("Error {}: {}", action, e)),
        },
        Err(e) => {
            let mut msg = format!("Error {}: {}", action, e);
            let hint = match &e {
                WpError::Upstream {
                    status: 401 | 403, ..
                } => hints.auth,
                WpError::Upstream { status: 404, .. } => hints.not_found,
                WpError::Missing(_) => hints.missing,
                _ => "",
            };
            if !hint.is_empty() {
                msg.push_str(". ");
                msg.push_str(hint);
            }
            error_envelope(ctx, msg)
        }
    }
}

fn error_envelope(ctx: &WpContext, msg: String) -> CallToolResult {
    warn!("{}", msg);
    ctx.log.write(&msg);
    CallToolResult::error(vec![Content::text(msg)])
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::config::SiteConfig;
    use crate::core::log::ToolLog;
    use crate::core::wp::WpClient;
    use rmcp::model::RawContent;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    /// Log sink that records lines for assertions.
    pub struct RecordingLog(pub Mutex<Vec<String>>);

    impl ToolLog for RecordingLog {
        fn write(&self, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    pub fn test_ctx() -> (WpContext, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog(Mutex::new(Vec::new())));
        let ctx = WpContext {
            client: WpClient::new(&SiteConfig::default()).unwrap(),
            log: log.clone(),
        };
        (ctx, log)
    }

    pub fn text_of(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1, "envelope must hold one content entry");
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_envelope_is_pretty_json() {
        let (ctx, log) = test_ctx();
        let result = run_tool(&ctx, "fetching product", &WC_HINTS, async {
            Ok::<_, WpError>(json!({"id": 5, "name": "Soap"}))
        })
        .await;

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["id"], 5);
        assert!(text.contains('\n'), "payload should be pretty-printed");
        assert_eq!(log.0.lock().unwrap().as_slice(), &["fetching product: ok"]);
    }

    #[tokio::test]
    async fn test_transport_error_has_exact_message_and_no_hint() {
        let (ctx, log) = test_ctx();
        let result = run_tool::<Value, _>(&ctx, "listing products", &WC_HINTS, async {
            Err(WpError::transport("connection refused"))
        })
        .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error listing products: connection refused"
        );
        assert_eq!(log.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_404_appends_family_hint() {
        let (ctx, _log) = test_ctx();
        let result = run_tool::<Value, _>(&ctx, "running SQL query", &SQL_HINTS, async {
            Err(WpError::Upstream {
                status: 404,
                message: "No route was found".to_string(),
                body: None,
            })
        })
        .await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("Error running SQL query: No route was found"));
        assert!(text.contains("companion plugin"));
    }

    #[tokio::test]
    async fn test_401_hint_mentions_credentials() {
        let (ctx, _log) = test_ctx();
        let result = run_tool::<Value, _>(&ctx, "listing users", &WP_HINTS, async {
            Err(WpError::Upstream {
                status: 401,
                message: "Sorry, you are not allowed to do that".to_string(),
                body: None,
            })
        })
        .await;

        let text = text_of(&result);
        assert!(text.contains("WP_USERNAME") || text.contains("application password"));
    }

    #[tokio::test]
    async fn test_missing_field_appends_config_hint() {
        let (ctx, _log) = test_ctx();
        let result = run_tool::<Value, _>(&ctx, "fetching ACF fields", &ACF_HINTS, async {
            Err(WpError::missing("no ACF field data in the response"))
        })
        .await;

        let text = text_of(&result);
        assert!(text.contains("Show in REST API"));
    }

    #[tokio::test]
    async fn test_validation_error_has_no_hint() {
        let (ctx, _log) = test_ctx();
        let result = run_tool::<Value, _>(&ctx, "listing products", &WC_HINTS, async {
            Err(WpError::validation("stock_status", "must be one of: instock, outofstock, onbackorder"))
        })
        .await;

        assert_eq!(
            text_of(&result),
            "Error listing products: invalid parameter 'stock_status': \
             must be one of: instock, outofstock, onbackorder"
        );
    }

    #[test]
    fn test_validate_enum_rejects_unknown_value() {
        assert!(validate_enum("order", "asc", &["asc", "desc"]).is_ok());
        let err = validate_enum("order", "sideways", &["asc", "desc"]).unwrap_err();
        assert!(err.to_string().contains("order"));
    }

    #[test]
    fn test_validate_paging_bounds() {
        assert!(validate_paging(None, None).is_ok());
        assert!(validate_paging(Some(1), Some(100)).is_ok());
        assert!(validate_paging(Some(0), None).is_err());
        assert!(validate_paging(None, Some(0)).is_err());
        assert!(validate_paging(None, Some(101)).is_err());
    }

    #[test]
    fn test_validate_required_rejects_blank() {
        assert!(validate_required("search", "soap").is_ok());
        assert!(validate_required("search", "  ").is_err());
    }
}
