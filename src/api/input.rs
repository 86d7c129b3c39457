use serde_json::{Map, Value};

/// Pick a whitelisted set of fields out of a JSON request body.
///
/// Fields that are absent or null in the body are left out of the result, so
/// `required` validation sees them as missing rather than as null values.
pub fn only(body: &Value, fields: &[&str]) -> Map<String, Value> {
    let mut picked = Map::new();
    if let Value::Object(obj) = body {
        for field in fields {
            match obj.get(*field) {
                Some(Value::Null) | None => {}
                Some(v) => {
                    picked.insert((*field).to_string(), v.clone());
                }
            }
        }
    }
    picked
}

/// Fetch a field as a string, accepting JSON strings and numbers.
pub fn as_text(input: &Map<String, Value>, field: &str) -> Option<String> {
    match input.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Fetch a field as an integer, accepting JSON numbers and numeric strings.
pub fn as_int(input: &Map<String, Value>, field: &str) -> Option<i32> {
    match input.get(field) {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
