//! WordPress API error taxonomy.

use serde_json::Value;
use thiserror::Error;

/// Errors raised by tool handlers and the WordPress API client.
///
/// Every variant is caught at the tool boundary and converted into the
/// uniform text envelope; none escape to the MCP caller as a raised error.
#[derive(Debug, Error)]
pub enum WpError {
    /// A parameter failed validation. Raised before any request is issued.
    #[error("invalid parameter '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Network, DNS, or decode failure with no HTTP status attached.
    #[error("{0}")]
    Transport(String),

    /// The remote API answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Upstream {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// An otherwise-successful response lacked an expected field
    /// (e.g., the ACF blob when the ACF REST integration is disabled).
    #[error("{0}")]
    Missing(String),
}

impl WpError {
    /// Create a validation error naming the offending field.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a missing-field error.
    pub fn missing(msg: impl Into<String>) -> Self {
        Self::Missing(msg.into())
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display_is_bare_message() {
        let err = WpError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_upstream_display_carries_status() {
        let err = WpError::Upstream {
            status: 404,
            message: "No route was found".to_string(),
            body: None,
        };
        assert_eq!(err.to_string(), "No route was found (HTTP 404)");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_validation_names_field() {
        let err = WpError::validation("stock_status", "must be one of instock, outofstock, onbackorder");
        assert!(err.to_string().contains("stock_status"));
    }
}
