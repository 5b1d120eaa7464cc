//! Generic WordPress REST API client.
//!
//! One method, one path relative to the site's `wp-json/` root, one optional
//! query or body. Authentication is HTTP Basic with a WordPress application
//! password, encoded once at construction. The client performs exactly one
//! round trip per call; retries and timeouts are left to the caller's policy.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;

use super::error::WpError;
use crate::core::config::SiteConfig;
use crate::core::error::{Error, Result};

/// Query string under construction.
///
/// Only explicitly provided filters become pairs; omitted filters are never
/// sent, so an unfiltered list call carries exactly its required parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required pair.
    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a pair only when the value is present.
    pub fn set_opt<T: ToString + std::fmt::Display>(self, key: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Optional request payload: nothing, a query string, or a JSON body.
pub enum Payload {
    None,
    Query(Query),
    Json(Value),
}

/// Client for a single WordPress site's REST API.
#[derive(Clone)]
pub struct WpClient {
    http: Client,
    api_root: Url,
    auth: Option<HeaderValue>,
}

impl WpClient {
    /// Build a client from site configuration.
    ///
    /// Fails only on a malformed site URL or credentials that cannot form a
    /// valid header; never touches the network.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let root = format!("{}/wp-json/", site.url.trim_end_matches('/'));
        let api_root = Url::parse(&root)
            .map_err(|e| Error::config(format!("invalid site URL '{}': {}", site.url, e)))?;

        let auth = if site.username.is_empty() {
            None
        } else {
            let token = BASE64.encode(format!("{}:{}", site.username, site.app_password));
            let value = HeaderValue::from_str(&format!("Basic {}", token))
                .map_err(|e| Error::config(format!("invalid credentials: {}", e)))?;
            Some(value)
        };

        Ok(Self {
            http: Client::new(),
            api_root,
            auth,
        })
    }

    /// Resolve an API path (e.g., `wp/v2/posts`) against the `wp-json/` root.
    fn endpoint(&self, path: &str) -> std::result::Result<Url, WpError> {
        self.api_root
            .join(path.trim_start_matches('/'))
            .map_err(|e| WpError::transport(format!("invalid endpoint path '{}': {}", path, e)))
    }

    /// Issue one request and decode the JSON response.
    ///
    /// Non-2xx statuses become [`WpError::Upstream`] carrying the status and
    /// the decoded error body; network and header failures become
    /// [`WpError::Transport`] with no status attached.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> std::result::Result<Value, WpError> {
        let url = self.endpoint(path)?;
        let mut req = self.http.request(method, url);

        if let Some(auth) = &self.auth {
            req = req.header(AUTHORIZATION, auth.clone());
        }

        match payload {
            Payload::None => {}
            Payload::Query(query) => {
                if !query.is_empty() {
                    req = req.query(query.pairs());
                }
            }
            Payload::Json(body) => {
                req = req.json(&body);
            }
        }

        let resp = req
            .send()
            .await
            .map_err(|e| WpError::transport(e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| WpError::transport(e.to_string()))?;

        // Non-JSON bodies pass through as plain strings rather than failing.
        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        if !status.is_success() {
            return Err(upstream_error(status, body));
        }

        Ok(body)
    }

    pub async fn get(&self, path: &str, query: Query) -> std::result::Result<Value, WpError> {
        self.request(Method::GET, path, Payload::Query(query)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> std::result::Result<Value, WpError> {
        self.request(Method::POST, path, Payload::Json(body)).await
    }
}

/// Convert a non-2xx response into an [`WpError::Upstream`].
///
/// WordPress error bodies look like `{"code": "...", "message": "...",
/// "data": {"status": 404}}`; the `message` field is preferred, falling back
/// to the canonical status reason.
fn upstream_error(status: StatusCode, body: Value) -> WpError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    WpError::Upstream {
        status: status.as_u16(),
        message,
        body: Some(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_site() -> SiteConfig {
        SiteConfig {
            url: "https://shop.example.com".to_string(),
            username: "admin".to_string(),
            app_password: "abcd efgh".to_string(),
            request_log: None,
        }
    }

    #[test]
    fn test_client_rejects_bad_url() {
        let site = SiteConfig {
            url: "not a url".to_string(),
            ..SiteConfig::default()
        };
        assert!(WpClient::new(&site).is_err());
    }

    #[test]
    fn test_endpoint_joins_relative_to_wp_json() {
        let client = WpClient::new(&test_site()).unwrap();
        let url = client.endpoint("wc/v3/products/5").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/wp-json/wc/v3/products/5");

        // Leading slash must not escape the API root.
        let url = client.endpoint("/wp/v2/posts").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/wp-json/wp/v2/posts");
    }

    #[test]
    fn test_trailing_slash_in_site_url_is_tolerated() {
        let site = SiteConfig {
            url: "https://shop.example.com/".to_string(),
            ..test_site()
        };
        let client = WpClient::new(&site).unwrap();
        let url = client.endpoint("wp/v2/posts").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/wp-json/wp/v2/posts");
    }

    #[test]
    fn test_query_skips_absent_filters() {
        let search: Option<String> = None;
        let per_page: Option<u32> = Some(20);
        let query = Query::new()
            .set("page", 1)
            .set_opt("search", search.as_ref())
            .set_opt("per_page", per_page.as_ref());
        assert_eq!(
            query.pairs(),
            &[
                ("page".to_string(), "1".to_string()),
                ("per_page".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_with_no_filters_is_empty() {
        let query = Query::new()
            .set_opt::<String>("search", None)
            .set_opt::<u32>("author", None);
        assert!(query.is_empty());
    }

    #[test]
    fn test_query_encodes_cleanly() {
        // Pairs survive standard form encoding (no null placeholders).
        let query = Query::new().set("search", "blue soap").set("per_page", 10);
        let encoded = serde_urlencoded::to_string(query.pairs()).unwrap();
        assert_eq!(encoded, "search=blue+soap&per_page=10");
    }

    #[test]
    fn test_upstream_error_prefers_body_message() {
        let err = upstream_error(
            StatusCode::NOT_FOUND,
            json!({"code": "rest_no_route", "message": "No route was found matching the URL"}),
        );
        match err {
            WpError::Upstream { status, message, body } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No route was found matching the URL");
                assert!(body.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_upstream_error_falls_back_to_reason() {
        let err = upstream_error(StatusCode::UNAUTHORIZED, Value::Null);
        match err {
            WpError::Upstream { status, message, .. } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
