//! Response normalization.
//!
//! Pure functions that reshape raw REST API payloads into smaller,
//! stable-shaped summaries. Every projection uses a fixed field list: fields
//! absent upstream pass through as `null`, never synthesized. Meta lists are
//! partitioned into user-facing `custom_meta` (keys without the leading
//! underscore marker) and the unfiltered `meta_data_all`.

use serde_json::{Map, Value};

/// Keys starting with this marker are platform-internal and excluded from
/// `custom_meta`.
const INTERNAL_META_PREFIX: char = '_';

/// Collapse an ordered `[{key, value}, ...]` meta list into a key->value map.
///
/// Internal-prefixed keys are skipped; later duplicates overwrite earlier
/// ones in list order. Non-array input yields an empty map.
pub fn custom_meta(meta_data: &Value) -> Map<String, Value> {
    let mut map = Map::new();
    let Some(entries) = meta_data.as_array() else {
        return map;
    };
    for entry in entries {
        let Some(key) = entry.get("key").and_then(Value::as_str) else {
            continue;
        };
        if key.starts_with(INTERNAL_META_PREFIX) {
            continue;
        }
        map.insert(
            key.to_string(),
            entry.get("value").cloned().unwrap_or(Value::Null),
        );
    }
    map
}

/// Unwrap WordPress's nested `{"rendered": "..."}` representation into the
/// plain value. Anything else passes through unchanged.
pub fn unwrap_rendered(value: Value) -> Value {
    match &value {
        Value::Object(obj) => obj.get("rendered").cloned().unwrap_or(value),
        _ => value,
    }
}

/// Apply a per-item transform to every element of an upstream array.
/// Non-array input (e.g., an error body) passes through unchanged.
pub fn normalize_list(raw: &Value, item: impl Fn(&Value) -> Value) -> Value {
    match raw.as_array() {
        Some(items) => Value::Array(items.iter().map(item).collect()),
        None => raw.clone(),
    }
}

fn pick(raw: &Value, field: &str) -> Value {
    raw.get(field).cloned().unwrap_or(Value::Null)
}

fn project(raw: &Value, fields: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields {
        out.insert((*field).to_string(), pick(raw, field));
    }
    out
}

/// Attach `custom_meta` / `meta_data_all` derived from the raw `meta_data`
/// list, and the `acf` blob when present upstream.
fn attach_meta(out: &mut Map<String, Value>, raw: &Value) {
    let meta = pick(raw, "meta_data");
    out.insert("custom_meta".to_string(), Value::Object(custom_meta(&meta)));
    out.insert("meta_data_all".to_string(), meta);
    if let Some(acf) = raw.get("acf") {
        out.insert("acf".to_string(), acf.clone());
    }
}

const PRODUCT_FIELDS: &[&str] = &[
    "id",
    "name",
    "slug",
    "permalink",
    "type",
    "status",
    "sku",
    "price",
    "regular_price",
    "sale_price",
    "price_html",
    "on_sale",
    "description",
    "short_description",
    "weight",
    "dimensions",
    "stock_status",
    "stock_quantity",
    "manage_stock",
    "categories",
    "tags",
    "images",
    "attributes",
    "variations",
    "related_ids",
    "upsell_ids",
    "cross_sell_ids",
    "parent_id",
    "average_rating",
    "rating_count",
    "total_sales",
    "date_created",
    "date_modified",
];

/// Project a WooCommerce product into its fixed summary shape.
pub fn product_summary(raw: &Value) -> Value {
    let mut out = project(raw, PRODUCT_FIELDS);
    attach_meta(&mut out, raw);
    Value::Object(out)
}

const VARIATION_FIELDS: &[&str] = &[
    "id",
    "sku",
    "permalink",
    "status",
    "price",
    "regular_price",
    "sale_price",
    "on_sale",
    "weight",
    "dimensions",
    "stock_status",
    "stock_quantity",
    "manage_stock",
    "image",
    "attributes",
    "date_created",
    "date_modified",
];

/// Project a product variation. Same convention as [`product_summary`] but
/// restricted to variation-relevant fields (no categories, tags, or
/// description).
pub fn variation_summary(raw: &Value) -> Value {
    let mut out = project(raw, VARIATION_FIELDS);
    attach_meta(&mut out, raw);
    Value::Object(out)
}

const POST_FIELDS: &[&str] = &[
    "id",
    "date",
    "modified",
    "slug",
    "status",
    "type",
    "link",
    "author",
    "categories",
    "tags",
];

/// Project a post or page, unwrapping the rendered title and excerpt.
pub fn post_summary(raw: &Value) -> Value {
    let mut out = project(raw, POST_FIELDS);
    out.insert("title".to_string(), unwrap_rendered(pick(raw, "title")));
    out.insert("excerpt".to_string(), unwrap_rendered(pick(raw, "excerpt")));
    if let Some(acf) = raw.get("acf") {
        out.insert("acf".to_string(), acf.clone());
    }
    Value::Object(out)
}

const TERM_FIELDS: &[&str] = &["id", "name", "slug", "description", "parent", "count"];

/// Project a taxonomy term (category or tag).
pub fn term_summary(raw: &Value) -> Value {
    Value::Object(project(raw, TERM_FIELDS))
}

const USER_FIELDS: &[&str] = &["id", "name", "slug", "description", "link", "roles"];

/// Project a user.
pub fn user_summary(raw: &Value) -> Value {
    Value::Object(project(raw, USER_FIELDS))
}

const COMMENT_FIELDS: &[&str] = &[
    "id",
    "post",
    "parent",
    "author",
    "author_name",
    "date",
    "status",
    "link",
];

/// Project a comment, unwrapping the rendered content.
pub fn comment_summary(raw: &Value) -> Value {
    let mut out = project(raw, COMMENT_FIELDS);
    out.insert("content".to_string(), unwrap_rendered(pick(raw, "content")));
    Value::Object(out)
}

const PLUGIN_FIELDS: &[&str] = &["plugin", "name", "status", "version", "author"];

/// Project a plugin entry.
pub fn plugin_summary(raw: &Value) -> Value {
    let mut out = project(raw, PLUGIN_FIELDS);
    out.insert(
        "description".to_string(),
        unwrap_rendered(pick(raw, "description")),
    );
    Value::Object(out)
}

const MEDIA_FIELDS: &[&str] = &[
    "id",
    "date",
    "slug",
    "type",
    "mime_type",
    "media_type",
    "source_url",
    "alt_text",
];

/// Project a media item, unwrapping the rendered title.
pub fn media_summary(raw: &Value) -> Value {
    let mut out = project(raw, MEDIA_FIELDS);
    out.insert("title".to_string(), unwrap_rendered(pick(raw, "title")));
    Value::Object(out)
}

/// Project a minimal content item from an ACF bulk listing
/// (`_fields=id,title,slug,acf`).
pub fn acf_item_summary(raw: &Value) -> Value {
    let mut out = Map::new();
    out.insert("id".to_string(), pick(raw, "id"));
    out.insert("title".to_string(), unwrap_rendered(pick(raw, "title")));
    out.insert("slug".to_string(), pick(raw, "slug"));
    out.insert("acf".to_string(), pick(raw, "acf"));
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_custom_meta_excludes_internal_keys() {
        let raw = json!({
            "id": 5,
            "name": "Soap",
            "meta_data": [
                {"key": "_internal", "value": "x"},
                {"key": "volume", "value": "100ml"}
            ]
        });
        let summary = product_summary(&raw);

        assert_eq!(summary["custom_meta"], json!({"volume": "100ml"}));
        assert_eq!(summary["meta_data_all"].as_array().unwrap().len(), 2);
        assert!(summary["custom_meta"].get("_internal").is_none());
        assert_eq!(summary["id"], 5);
        assert_eq!(summary["name"], "Soap");
    }

    #[test]
    fn test_custom_meta_is_subset_of_meta_data_all() {
        let meta = json!([
            {"key": "_sku_history", "value": [1, 2]},
            {"key": "origin", "value": "FR"},
            {"key": "batch", "value": 7}
        ]);
        let map = custom_meta(&meta);
        let all_keys: Vec<&str> = meta
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|e| e["key"].as_str())
            .collect();
        for key in map.keys() {
            assert!(all_keys.contains(&key.as_str()));
            assert!(!key.starts_with('_'));
        }
    }

    #[test]
    fn test_custom_meta_later_duplicates_overwrite() {
        let meta = json!([
            {"key": "color", "value": "red"},
            {"key": "color", "value": "blue"}
        ]);
        let map = custom_meta(&meta);
        assert_eq!(map["color"], json!("blue"));
    }

    #[test]
    fn test_custom_meta_tolerates_non_array() {
        assert!(custom_meta(&Value::Null).is_empty());
        assert!(custom_meta(&json!({"key": "x"})).is_empty());
        assert!(custom_meta(&json!([{"value": "no key"}])).is_empty());
    }

    #[test]
    fn test_product_summary_contains_every_fixed_field() {
        let summary = product_summary(&json!({"id": 1}));
        let obj = summary.as_object().unwrap();
        for field in PRODUCT_FIELDS {
            assert!(obj.contains_key(*field), "missing field {}", field);
        }
        // Absent upstream fields pass through as null.
        assert_eq!(summary["sku"], Value::Null);
        assert_eq!(summary["custom_meta"], json!({}));
        assert_eq!(summary["meta_data_all"], Value::Null);
        // acf appears only when present upstream.
        assert!(obj.get("acf").is_none());
    }

    #[test]
    fn test_product_summary_carries_acf_when_present() {
        let summary = product_summary(&json!({"id": 1, "acf": {"scent": "lavender"}}));
        assert_eq!(summary["acf"], json!({"scent": "lavender"}));
    }

    #[test]
    fn test_variation_summary_drops_product_only_fields() {
        let raw = json!({
            "id": 9,
            "sku": "SOAP-L",
            "description": "large bar",
            "categories": [{"id": 1}],
            "meta_data": [{"key": "scent", "value": "pine"}]
        });
        let summary = variation_summary(&raw);
        let obj = summary.as_object().unwrap();
        assert!(obj.get("description").is_none());
        assert!(obj.get("categories").is_none());
        assert_eq!(summary["custom_meta"], json!({"scent": "pine"}));
    }

    #[test]
    fn test_post_summary_unwraps_rendered_title() {
        let raw = json!({
            "id": 12,
            "title": {"rendered": "Hello World"},
            "excerpt": {"rendered": "<p>Hi</p>"}
        });
        let summary = post_summary(&raw);
        assert_eq!(summary["title"], json!("Hello World"));
        assert_eq!(summary["excerpt"], json!("<p>Hi</p>"));
    }

    #[test]
    fn test_unwrap_rendered_passes_other_shapes_through() {
        assert_eq!(unwrap_rendered(json!("plain")), json!("plain"));
        assert_eq!(unwrap_rendered(Value::Null), Value::Null);
        assert_eq!(unwrap_rendered(json!({"other": 1})), json!({"other": 1}));
    }

    #[test]
    fn test_normalize_list_maps_arrays_only() {
        let raw = json!([{"id": 1}, {"id": 2}]);
        let out = normalize_list(&raw, term_summary);
        assert_eq!(out.as_array().unwrap().len(), 2);

        // An error body is not an array: pass through unchanged.
        let error_body = json!({"code": "rest_forbidden", "message": "nope"});
        assert_eq!(normalize_list(&error_body, term_summary), error_body);
    }

    #[test]
    fn test_normalization_is_idempotent_on_same_input() {
        let raw = json!({
            "id": 5,
            "name": "Soap",
            "meta_data": [
                {"key": "volume", "value": "100ml"},
                {"key": "_hidden", "value": 1}
            ]
        });
        assert_eq!(product_summary(&raw), product_summary(&raw));
    }

    #[test]
    fn test_comment_summary_unwraps_content() {
        let raw = json!({"id": 3, "post": 12, "content": {"rendered": "<p>Nice</p>"}});
        let summary = comment_summary(&raw);
        assert_eq!(summary["content"], json!("<p>Nice</p>"));
        assert_eq!(summary["post"], 12);
    }

    #[test]
    fn test_acf_item_summary_shape() {
        let raw = json!({
            "id": 7,
            "title": {"rendered": "About"},
            "slug": "about",
            "acf": {"hero": "img.png"}
        });
        let summary = acf_item_summary(&raw);
        assert_eq!(
            summary,
            json!({"id": 7, "title": "About", "slug": "about", "acf": {"hero": "img.png"}})
        );
    }
}
