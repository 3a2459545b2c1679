//! Single-record decoding for write responses and detail fetches.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Move `_id` into `id` so records decode the same whichever key the
/// backend used. An existing `id` wins and `_id` is dropped.
pub fn normalize_id(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        normalize_id_in_map(map);
    }
    value
}

fn normalize_id_in_map(map: &mut Map<String, Value>) {
    if let Some(raw) = map.remove("_id") {
        if !map.contains_key("id") {
            map.insert("id".to_string(), raw);
        }
    }
}

fn has_id(value: &Value) -> bool {
    value
        .as_object()
        .map(|m| m.contains_key("id") || m.contains_key("_id"))
        .unwrap_or(false)
}

/// Decode one record from a response body.
///
/// The body is used directly when it carries an id; otherwise the record is
/// looked up under `data` and then under each of `envelope_keys`
/// (e.g. `{"message": "...", "product": {...}}`).
pub fn decode_record<T: DeserializeOwned>(
    body: Value,
    envelope_keys: &[&str],
) -> Result<T, serde_json::Error> {
    if has_id(&body) {
        return serde_json::from_value(normalize_id(body));
    }
    if let Value::Object(map) = &body {
        for key in std::iter::once(&"data").chain(envelope_keys.iter()) {
            if let Some(inner) = map.get(*key) {
                if has_id(inner) {
                    return serde_json::from_value(normalize_id(inner.clone()));
                }
            }
        }
    }
    serde_json::from_value(normalize_id(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rec {
        id: String,
        name: String,
    }

    #[test]
    fn test_normalize_id() {
        let v = normalize_id(json!({"_id": "1", "name": "a"}));
        assert_eq!(v, json!({"id": "1", "name": "a"}));
        let v = normalize_id(json!({"_id": "1", "id": "2"}));
        assert_eq!(v, json!({"id": "2"}));
    }

    #[test]
    fn test_decode_direct_and_enveloped() {
        let direct: Rec = decode_record(json!({"_id": "1", "name": "a"}), &[]).unwrap();
        assert_eq!(direct.id, "1");

        let data: Rec =
            decode_record(json!({"success": true, "data": {"id": "2", "name": "b"}}), &[]).unwrap();
        assert_eq!(data.id, "2");

        let named: Rec = decode_record(
            json!({"message": "Updated", "product": {"_id": "3", "name": "c"}}),
            &["product"],
        )
        .unwrap();
        assert_eq!(named.name, "c");
    }

    #[test]
    fn test_decode_failure_is_error() {
        assert!(decode_record::<Rec>(json!({"message": "ok"}), &["product"]).is_err());
    }
}
