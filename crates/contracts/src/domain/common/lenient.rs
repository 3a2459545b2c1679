//! Tolerant deserializers for backend fields whose JSON type drifts between
//! endpoints (numbers sent as strings, ids sent as numbers, explicit nulls).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number, numeric string or null → f64 (null and garbage become 0.0)
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64).unwrap_or(0.0))
}

/// Number, numeric string or null → i64 (fractions are truncated)
pub fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| match v {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
            }
            _ => None,
        })
        .unwrap_or(0))
}

/// String, number or null → String (null becomes empty)
pub fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Optional string where blank text counts as absent
pub fn opt_string_nonblank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Reference that may arrive as a bare id or as a populated object
/// (`{"_id": "...", "name": "..."}`); only the id is kept.
pub fn reference_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(reference_id_of).unwrap_or_default())
}

/// RFC 3339 timestamp, or `None` for null, missing or unparseable text
pub fn opt_datetime_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

/// Boolean that may arrive as `true`, `"true"`, `1`
pub fn bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0).unwrap_or(false),
        Some(Value::String(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    })
}

pub(crate) fn reference_id_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map
            .get("_id")
            .or_else(|| map.get("id"))
            .map(reference_id_of)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Widget {
        #[serde(default, deserialize_with = "f64_lenient")]
        price: f64,
        #[serde(default, deserialize_with = "i64_lenient")]
        stock: i64,
        #[serde(default, deserialize_with = "string_lenient")]
        sku: String,
        #[serde(default, deserialize_with = "opt_string_nonblank")]
        notes: Option<String>,
        #[serde(default, deserialize_with = "reference_id")]
        product: String,
        #[serde(default, deserialize_with = "opt_datetime_lenient")]
        created_at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "bool_lenient")]
        read: bool,
    }

    #[test]
    fn test_lenient_fields() {
        let p: Widget = serde_json::from_str(
            r#"{"price":"12.50","stock":"7","sku":1001,"notes":"  ","product":{"_id":"p1","name":"Cap"}}"#,
        )
        .unwrap();
        assert_eq!(p.price, 12.5);
        assert_eq!(p.stock, 7);
        assert_eq!(p.sku, "1001");
        assert_eq!(p.notes, None);
        assert_eq!(p.product, "p1");
        assert!(p.created_at.is_none());
    }

    #[test]
    fn test_timestamps_and_flags() {
        let p: Widget =
            serde_json::from_str(r#"{"created_at":"2024-03-15T14:02:26.123Z","read":"true"}"#)
                .unwrap();
        assert_eq!(
            p.created_at.unwrap().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-03-15 14:02:26"
        );
        assert!(p.read);

        let p: Widget = serde_json::from_str(r#"{"created_at":"yesterday","read":0}"#).unwrap();
        assert!(p.created_at.is_none());
        assert!(!p.read);
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let p: Widget = serde_json::from_str(r#"{"price":null,"stock":4.9}"#).unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.stock, 4);
        assert_eq!(p.sku, "");
        assert_eq!(p.product, "");
    }
}
