//! Tests for decoder module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// JsonDecoder Tests
// ============================================================================

#[test]
fn test_json_decoder_object() {
    let decoder = JsonDecoder::new();
    let value = decoder
        .decode(br#"{"data": [1, 2], "total_pages": 3}"#)
        .unwrap();

    assert_eq!(value, json!({"data": [1, 2], "total_pages": 3}));
}

#[test]
fn test_json_decoder_array_body() {
    let decoder = JsonDecoder::new();
    let value = decoder.decode(b"[\"foo\", \"bar\"]").unwrap();
    assert_eq!(value, json!(["foo", "bar"]));
}

#[test]
fn test_json_decoder_invalid() {
    let decoder = JsonDecoder::new();
    let err = decoder.decode(b"<html>oops</html>").unwrap_err();

    assert!(matches!(err, crate::Error::Decode { .. }));
    assert!(err.to_string().contains("Failed to parse JSON"));
}

#[test]
fn test_json_decoder_empty_body() {
    let decoder = JsonDecoder::new();
    assert!(decoder.decode(b"").is_err());
}

// ============================================================================
// lookup Tests
// ============================================================================

#[test]
fn test_lookup_flat_key() {
    let value = json!({"data": [1], "meta": {"total": 2}});
    assert_eq!(lookup(&value, "data"), Some(&json!([1])));
    assert_eq!(lookup(&value, "missing"), None);
}

#[test]
fn test_lookup_empty_path_is_whole_value() {
    let value = json!(["a", "b"]);
    assert_eq!(lookup(&value, ""), Some(&value));
}

#[test]
fn test_lookup_dotted_path() {
    let value = json!({"meta": {"pagination": {"total_pages": 7}}});
    assert_eq!(lookup(&value, "meta.pagination.total_pages"), Some(&json!(7)));
    assert_eq!(lookup(&value, "meta.pagination.nope"), None);
    assert_eq!(lookup(&value, "meta.pagination.total_pages.deeper"), None);
}

#[test]
fn test_lookup_literal_key_wins_over_dotted() {
    let value = json!({"a.b": "literal", "a": {"b": "nested"}});
    assert_eq!(lookup(&value, "a.b"), Some(&json!("literal")));
}

#[test]
fn test_lookup_non_object_root() {
    assert_eq!(lookup(&json!([1, 2]), "data"), None);
    assert_eq!(lookup(&json!("text"), "data"), None);
    assert_eq!(lookup(&json!(null), "data"), None);
}

// ============================================================================
// extract_items Tests
// ============================================================================

#[test]
fn test_extract_items_array() {
    let value = json!({"data": [{"id": 1}, {"id": 2}]});
    assert_eq!(
        extract_items(value, "data"),
        vec![json!({"id": 1}), json!({"id": 2})]
    );
}

#[test]
fn test_extract_items_missing_is_empty() {
    assert!(extract_items(json!({"results": [1]}), "data").is_empty());
    assert!(extract_items(json!([]), "data").is_empty());
    assert!(extract_items(json!({"data": null}), "data").is_empty());
}

#[test]
fn test_extract_items_object_is_not_a_list() {
    let value = json!({"data": {"id": 1}});
    assert!(extract_items(value, "data").is_empty());
}

#[test]
fn test_extract_items_scalar_is_not_a_list() {
    assert!(extract_items(json!({"data": 42}), "data").is_empty());
    assert!(extract_items(json!({"data": "one"}), "data").is_empty());
    assert!(extract_items(json!({"data": true}), "data").is_empty());
}

#[test]
fn test_extract_items_dotted_path_to_non_array() {
    let value = json!({"result": {"users": {"ann": 1}}});
    assert!(extract_items(value, "result.users").is_empty());
}

#[test]
fn test_extract_items_empty_path_is_whole_body() {
    let value = json!({"data": ["foo", "bar"], "total_pages": 1});
    assert_eq!(extract_items(value.clone(), ""), vec![value]);
}

#[test]
fn test_extract_items_dotted_path() {
    let value = json!({"result": {"users": ["ann", "bob"]}});
    assert_eq!(
        extract_items(value, "result.users"),
        vec![json!("ann"), json!("bob")]
    );
}

// ============================================================================
// extract_u64 Tests
// ============================================================================

#[test]
fn test_extract_u64_number() {
    assert_eq!(extract_u64(&json!({"total_pages": 3}), "total_pages"), Some(3));
    assert_eq!(extract_u64(&json!({"total_pages": 3.0}), "total_pages"), Some(3));
}

#[test]
fn test_extract_u64_numeric_string() {
    assert_eq!(
        extract_u64(&json!({"total_pages": "12"}), "total_pages"),
        Some(12)
    );
}

#[test]
fn test_extract_u64_rejects_other_shapes() {
    assert_eq!(extract_u64(&json!({"total_pages": -1}), "total_pages"), None);
    assert_eq!(extract_u64(&json!({"total_pages": 2.5}), "total_pages"), None);
    assert_eq!(
        extract_u64(&json!({"total_pages": "many"}), "total_pages"),
        None
    );
    assert_eq!(
        extract_u64(&json!({"total_pages": [3]}), "total_pages"),
        None
    );
    assert_eq!(extract_u64(&json!({}), "total_pages"), None);
}
