//! Content key normalization service
//!
//! The content store writes snake_case keys; the typed model reads
//! camelCase. Normalization rewrites every object key at every depth and
//! leaves values alone.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::types::Result;

fn separator_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_\s]+(.)?").expect("separator pattern is valid"))
}

/// Numeric keys ("1", "2.5") are never rewritten; blank keys count as numeric
fn is_numeric(key: &str) -> bool {
    let trimmed = key.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(|n| !n.is_nan())
}

/// Convert a single key to camelCase.
///
/// Each run of `-`, `_` or whitespace is dropped and the character after it
/// is uppercased; the first character is lowercased.
///
/// # Examples
/// ```
/// use picksite::services::normalizer::camelize;
///
/// assert_eq!(camelize("items_analyzed"), "itemsAnalyzed");
/// assert_eq!(camelize("content-type_data"), "contentTypeData");
/// assert_eq!(camelize("itemsAnalyzed"), "itemsAnalyzed");
/// ```
pub fn camelize(key: &str) -> String {
    if is_numeric(key) {
        return key.to_string();
    }

    let joined = separator_run().replace_all(key, |caps: &regex::Captures| {
        caps.get(1)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    });

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Recursively camelize every object key, including objects nested in arrays
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in map {
                out.insert(camelize(&key), camelize_keys(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

/// Parse a snake_case JSON document into a camelCase typed model
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(serde_json::from_value(camelize_keys(value))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========== camelize ==========

    #[test]
    fn test_snake_case() {
        assert_eq!(camelize("page_content_type"), "pageContentType");
    }

    #[test]
    fn test_kebab_and_spaces() {
        assert_eq!(camelize("hero-badge"), "heroBadge");
        assert_eq!(camelize("battery life"), "batteryLife");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(camelize("a__b"), "aB");
        assert_eq!(camelize("a_-_b"), "aB");
    }

    #[test]
    fn test_trailing_separator_dropped() {
        assert_eq!(camelize("name_"), "name");
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(camelize("_private"), "private");
    }

    #[test]
    fn test_first_char_lowercased() {
        assert_eq!(camelize("SiteTitle"), "siteTitle");
    }

    #[test]
    fn test_numeric_key_unchanged() {
        assert_eq!(camelize("2024"), "2024");
        assert_eq!(camelize("1.5"), "1.5");
    }

    #[test]
    fn test_json_ld_keys_unchanged() {
        assert_eq!(camelize("@context"), "@context");
        assert_eq!(camelize("@type"), "@type");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_camelize_idempotent() {
        for key in [
            "items_analyzed",
            "A_b",
            "__x__",
            "hello world-foo_bar",
            "already",
            "@type",
            "42",
            "ünï_cödé",
        ] {
            let once = camelize(key);
            assert_eq!(camelize(&once), once, "key {:?}", key);
        }
    }

    // ========== camelize_keys ==========

    #[test]
    fn test_nested_objects_and_arrays() {
        let input = json!({
            "site_id": "woodshop",
            "categories": [
                {"category_id": "saws", "pages": [{"page_id": "table_saws", "items_analyzed": 120}]}
            ]
        });
        let out = camelize_keys(input);
        assert_eq!(out["siteId"], "woodshop");
        assert_eq!(out["categories"][0]["categoryId"], "saws");
        assert_eq!(out["categories"][0]["pages"][0]["itemsAnalyzed"], 120);
    }

    #[test]
    fn test_values_untouched() {
        let out = camelize_keys(json!({"page_content_type": "physical_product"}));
        assert_eq!(out["pageContentType"], "physical_product");
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(camelize_keys(json!(3)), json!(3));
        assert_eq!(camelize_keys(json!(null)), json!(null));
        assert_eq!(camelize_keys(json!(["a_b"])), json!(["a_b"]));
    }

    #[test]
    fn test_key_order_preserved() {
        let out = camelize_keys(json!({"z_last": 1, "a_first": 2}));
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zLast", "aFirst"]);
    }

    #[test]
    fn test_camelize_keys_idempotent() {
        let input = json!({
            "content_type_data": {"list_item": {"some-key": [{"deep_key": {"x_y": 1}}]}},
            "Schema": {"@context": "https://schema.org"}
        });
        let once = camelize_keys(input);
        let twice = camelize_keys(once.clone());
        assert_eq!(once, twice);
    }

    // ========== decode ==========

    #[test]
    fn test_decode_typed() {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Page {
            page_id: String,
            items_featured: u64,
        }

        let page: Page = decode(r#"{"page_id": "p1", "items_featured": 12}"#).unwrap();
        assert_eq!(page.page_id, "p1");
        assert_eq!(page.items_featured, 12);
    }

    #[test]
    fn test_decode_invalid_json() {
        let result: Result<Value> = decode("{oops");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_snake_case_nulls() {
        use crate::types::{Item, SiteConfig};

        let config: SiteConfig = decode(
            r#"{"site_id": "shop", "articles": null, "stats": {"total_items_analyzed": 5, "last_updated": null}}"#,
        )
        .unwrap();
        assert!(config.articles.is_empty());
        assert_eq!(config.stats.unwrap().total_items_analyzed, 5);

        let item: Item = decode(r#"{"rank": 1, "name": "A", "media": {"images": null}}"#).unwrap();
        assert!(item.media.unwrap().images.is_empty());
    }
}
