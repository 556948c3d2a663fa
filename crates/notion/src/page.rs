//! Page object helpers.
//!
//! A page object carries identity, timestamps, authorship, parent linkage and the `properties`
//! map. Only `properties` and `parent.type` are interpreted here; every other field is left to
//! the caller untouched.

use crate::{NotionError, NotionResult, PropertyValue};
use serde_json::Value;
use std::collections::HashMap;

/// Decoded properties keyed by exact, case-sensitive property name.
pub type PropertyMap = HashMap<String, PropertyValue>;

/// Decode the `properties` map of a page object.
///
/// This never fails. A missing or non-object `properties` field yields an empty map, and each
/// property that does not decode is kept as [`PropertyValue::Unsupported`] so that a bad value
/// only affects lookups of that one name.
pub fn decode_properties(metadata: &Value) -> PropertyMap {
    let Some(properties) = metadata.get("properties").and_then(Value::as_object) else {
        let page_id = metadata
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>");
        tracing::warn!(
            page_id,
            "page has no properties object; all lookups will fall back to defaults"
        );
        return PropertyMap::new();
    };

    properties
        .iter()
        .map(|(name, value)| (name.clone(), PropertyValue::decode_lenient(value)))
        .collect()
}

/// The `parent.type` tag of a page object, e.g. `database_id` or `workspace`.
pub fn parent_type(metadata: &Value) -> Option<&str> {
    metadata
        .get("parent")
        .and_then(|parent| parent.get("type"))
        .and_then(Value::as_str)
}

/// Parse page JSON text into a raw value.
///
/// # Errors
///
/// Returns [`NotionError::InvalidJson`] if the text is not JSON, or
/// [`NotionError::Translation`] if it is not a JSON object.
pub fn parse_page_json(text: &str) -> NotionResult<Value> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(NotionError::Translation(
            "page JSON must be an object".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_each_property_independently() {
        let metadata = json!({
            "id": "6e6921b9-b1f5-4614-ab3c-bf1a73358a1f",
            "properties": {
                "number_property": { "id": "WPj%5E", "type": "number", "number": 42 },
                "broken": { "id": "x", "type": "checkbox", "checkbox": "yes" },
                "status": { "id": "s", "type": "status", "status": { "name": "Done" } }
            }
        });

        let properties = decode_properties(&metadata);
        assert_eq!(properties.len(), 3);
        assert_eq!(
            properties.get("number_property"),
            Some(&PropertyValue::Number(Some(42.0)))
        );
        assert_eq!(properties["broken"].kind_name(), "malformed");
        assert_eq!(properties["status"].kind_name(), "status");
    }

    #[test]
    fn missing_or_invalid_properties_yield_empty_map() {
        assert!(decode_properties(&json!({ "id": "abc" })).is_empty());
        assert!(decode_properties(&json!({ "properties": [1, 2] })).is_empty());
        assert!(decode_properties(&json!(null)).is_empty());
    }

    #[test]
    fn page_without_properties_keeps_its_id_readable() {
        let metadata = json!({ "id": "6e6921b9-b1f5-4614-ab3c-bf1a73358a1f", "object": "page" });
        let properties = decode_properties(&metadata);
        assert!(properties.is_empty());
        assert_eq!(metadata["id"], "6e6921b9-b1f5-4614-ab3c-bf1a73358a1f");
        assert!(decode_properties(&json!({ "properties": "oops" })).is_empty());
    }

    #[test]
    fn date_without_payload_decodes_as_unset() {
        let metadata = json!({ "properties": { "due": { "type": "date" } } });
        assert_eq!(
            decode_properties(&metadata).get("due"),
            Some(&PropertyValue::Date(None))
        );
    }

    #[test]
    fn reads_parent_type() {
        let metadata = json!({ "parent": { "type": "database_id", "database_id": "d" } });
        assert_eq!(parent_type(&metadata), Some("database_id"));
        assert_eq!(parent_type(&json!({})), None);
    }

    #[test]
    fn parse_page_json_requires_an_object() {
        assert!(parse_page_json(r#"{"object": "page"}"#).is_ok());
        assert!(matches!(
            parse_page_json("[1]"),
            Err(NotionError::Translation(_))
        ));
        assert!(matches!(
            parse_page_json("not json"),
            Err(NotionError::InvalidJson(_))
        ));
    }
}
