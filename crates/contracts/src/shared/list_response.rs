//! Canonical list extraction from heterogeneous response bodies.
//!
//! The backend answers list requests in several shapes: a bare array,
//! `{"requests": [...]}`, `{"data": [...]}`, `{"data": {"items": [...]}}`, or
//! an object carrying the array under an arbitrary key. All of them reduce to
//! the same canonical list.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::common::normalize_id;

/// Keys probed, in order, before falling back to scanning every property
pub const KNOWN_LIST_KEYS: &[&str] = &[
    "requests",
    "data",
    "items",
    "inventory",
    "products",
    "notifications",
    "results",
];

/// Find the canonical array inside a response body.
///
/// Order: the body itself if it is an array; the first known key holding an
/// array (one level of nesting under a known key is followed); then the
/// first array-valued property in document order. `None` when the body
/// contains no array at all.
pub fn extract_list(body: &Value) -> Option<&Vec<Value>> {
    match body {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            for key in KNOWN_LIST_KEYS {
                match map.get(*key) {
                    Some(Value::Array(items)) => return Some(items),
                    Some(nested @ Value::Object(_)) => {
                        if let Some(items) = known_key_array(nested) {
                            return Some(items);
                        }
                    }
                    _ => {}
                }
            }
            map.values().find_map(|v| v.as_array())
        }
        _ => None,
    }
}

fn known_key_array(body: &Value) -> Option<&Vec<Value>> {
    let map = body.as_object()?;
    KNOWN_LIST_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_array))
}

/// Canonical records decoded from a response body
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalList<T> {
    pub items: Vec<T>,
    /// Array elements that did not decode into `T` and were dropped
    pub skipped: usize,
}

impl<T> Default for CanonicalList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }
}

/// Extract the canonical array and decode each element, dropping elements
/// that do not match `T`. `_id` keys are folded into `id` first.
/// `None` when the body contains no array.
pub fn decode_list<T: DeserializeOwned>(body: &Value) -> Option<CanonicalList<T>> {
    let raw = extract_list(body)?;
    let mut list = CanonicalList::default();
    for element in raw {
        match serde_json::from_value::<T>(normalize_id(element.clone())) {
            Ok(item) => list.items.push(item),
            Err(_) => list.skipped += 1,
        }
    }
    Some(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rec {
        id: String,
    }

    fn ids(list: &[Value]) -> Vec<&str> {
        list.iter().filter_map(|v| v["id"].as_str()).collect()
    }

    #[test]
    fn test_shapes_normalize_to_same_list() {
        let bare = json!([{"id": "1"}, {"id": "2"}]);
        let requests = json!({"requests": [{"id": "1"}, {"id": "2"}], "total": 2});
        let data = json!({"success": true, "data": [{"id": "1"}, {"id": "2"}]});

        let expected = vec!["1", "2"];
        assert_eq!(ids(extract_list(&bare).unwrap()), expected);
        assert_eq!(ids(extract_list(&requests).unwrap()), expected);
        assert_eq!(ids(extract_list(&data).unwrap()), expected);
    }

    #[test]
    fn test_nested_known_key() {
        let body = json!({"data": {"items": [{"id": "7"}], "page": 1}});
        assert_eq!(ids(extract_list(&body).unwrap()), vec!["7"]);
    }

    #[test]
    fn test_arbitrary_key_scanned_in_document_order() {
        let body = json!({"meta": {"count": 1}, "purchaseRequests": [{"id": "a"}], "other": [{"id": "b"}]});
        assert_eq!(ids(extract_list(&body).unwrap()), vec!["a"]);
    }

    #[test]
    fn test_known_key_wins_over_earlier_unknown_key() {
        let body = json!({"tags": ["x"], "data": [{"id": "1"}]});
        assert_eq!(ids(extract_list(&body).unwrap()), vec!["1"]);
    }

    #[test]
    fn test_no_array() {
        assert!(extract_list(&json!({"message": "ok"})).is_none());
        assert!(extract_list(&json!("text")).is_none());
        assert!(extract_list(&Value::Null).is_none());
    }

    #[test]
    fn test_empty_array_is_a_list() {
        let list = decode_list::<Rec>(&json!({"data": []})).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.skipped, 0);
    }

    #[test]
    fn test_decode_folds_mongo_ids() {
        let list = decode_list::<Rec>(&json!({"items": [{"_id": "m1"}]})).unwrap();
        assert_eq!(list.items, vec![Rec { id: "m1".into() }]);
    }

    #[test]
    fn test_decode_skips_bad_elements() {
        let body = json!([{"id": "1"}, {"name": "no id"}, {"id": "3"}]);
        let list = decode_list::<Rec>(&body).unwrap();
        assert_eq!(
            list.items,
            vec![Rec { id: "1".into() }, Rec { id: "3".into() }]
        );
        assert_eq!(list.skipped, 1);
    }
}
