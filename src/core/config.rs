//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// WordPress site connection configuration.
    pub site: SiteConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection configuration for the target WordPress site.
#[derive(Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the WordPress site (e.g., "https://example.com").
    /// The REST API root is derived as `{url}/wp-json/`.
    pub url: String,

    /// WordPress username the application password belongs to.
    pub username: String,

    /// WordPress application password used for Basic authentication.
    /// Create one under Users -> Profile -> Application Passwords.
    pub app_password: String,

    /// Optional path to the request log file. When set, every tool call
    /// appends one line describing its outcome.
    pub request_log: Option<PathBuf>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field(
                "app_password",
                &if self.app_password.is_empty() {
                    "[EMPTY]"
                } else {
                    "[REDACTED]"
                },
            )
            .field("request_log", &self.request_log)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost".to_string(),
            username: String::new(),
            app_password: String::new(),
            request_log: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "wordpress-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            site: SiteConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `WP_SITE_URL`, `WP_USERNAME`, `WP_APP_PASSWORD`, `WP_REQUEST_LOG`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("WP_SITE_URL") {
            config.site.url = url.trim_end_matches('/').to_string();
            info!("WordPress site URL: {}", config.site.url);
        } else {
            warn!("WP_SITE_URL not set - defaulting to {}", config.site.url);
        }

        if let Ok(username) = std::env::var("WP_USERNAME") {
            config.site.username = username;
        } else {
            warn!("WP_USERNAME not set - requests will be unauthenticated");
        }

        if let Ok(password) = std::env::var("WP_APP_PASSWORD") {
            config.site.app_password = password;
        } else {
            warn!(
                "WP_APP_PASSWORD not set - protected endpoints (users, plugins, \
                 WooCommerce) will be rejected by the site"
            );
        }

        if let Ok(path) = std::env::var("WP_REQUEST_LOG") {
            config.site.request_log = Some(PathBuf::from(path));
            info!("Request log enabled: {:?}", config.site.request_log);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_site_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("WP_SITE_URL", "https://shop.example.com/");
            std::env::set_var("WP_USERNAME", "admin");
            std::env::set_var("WP_APP_PASSWORD", "abcd efgh ijkl");
        }
        let config = Config::from_env();
        assert_eq!(config.site.url, "https://shop.example.com");
        assert_eq!(config.site.username, "admin");
        assert_eq!(config.site.app_password, "abcd efgh ijkl");
        unsafe {
            std::env::remove_var("WP_SITE_URL");
            std::env::remove_var("WP_USERNAME");
            std::env::remove_var("WP_APP_PASSWORD");
        }
    }

    #[test]
    fn test_site_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("WP_SITE_URL");
            std::env::remove_var("WP_USERNAME");
            std::env::remove_var("WP_APP_PASSWORD");
        }
        let config = Config::from_env();
        assert_eq!(config.site.url, "http://localhost");
        assert!(config.site.username.is_empty());
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let site = SiteConfig {
            app_password: "super_secret_key".to_string(),
            ..SiteConfig::default()
        };
        let debug_str = format!("{:?}", site);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_request_log_unset_by_default() {
        let config = Config::default();
        assert!(config.site.request_log.is_none());
    }
}
