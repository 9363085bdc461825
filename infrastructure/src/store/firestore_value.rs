//! Decoding of Firestore typed values into plain JSON
//!
//! The REST API wraps every field in a single-key object naming its type,
//! e.g. `{"integerValue": "2"}` or `{"mapValue": {"fields": {...}}}`.

use serde_json::{Map, Number, Value};

/// Decode a document's `fields` object
pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Decode one typed value. Unknown shapes pass through unchanged.
pub fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };
    let Some((kind, inner)) = obj.iter().next().filter(|_| obj.len() == 1) else {
        return value.clone();
    };

    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" | "doubleValue" => inner.clone(),
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(Number::from(n)))
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default(),
        ),
        "geoPointValue" => inner.clone(),
        _ => value.clone(),
    }
}
