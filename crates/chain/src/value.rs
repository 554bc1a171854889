//! Helpers for working with possibly-absent `serde_json::Value`s
//!
//! Chains see their input as `Option<&Value>`: `None` is an absent value,
//! `Some(&Value::Null)` is an explicit `null`.

use serde_json::Value;

/// Returns the type name of a value for diagnostics.
pub fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "absent",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Extracts a number as `f64`, if the value is a number.
#[inline]
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().or_else(|| n.as_i64().map(|i| i as f64)),
        _ => None,
    }
}

/// Returns the length of a string (in characters) or an array.
///
/// Every other value has no length.
pub fn length(value: Option<&Value>) -> Option<usize> {
    match value {
        Some(Value::String(s)) => Some(s.chars().count()),
        Some(Value::Array(items)) => Some(items.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(None), "absent");
        assert_eq!(type_name(Some(&Value::Null)), "null");
        assert_eq!(type_name(Some(&json!(1.5))), "number");
        assert_eq!(type_name(Some(&json!([1]))), "array");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(Some(&json!(42))), Some(42.0));
        assert_eq!(as_number(Some(&json!(-0.5))), Some(-0.5));
        assert_eq!(as_number(Some(&json!("42"))), None);
        assert_eq!(as_number(None), None);
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(length(Some(&json!("héllo"))), Some(5));
        assert_eq!(length(Some(&json!([1, 2, 3]))), Some(3));
        assert_eq!(length(Some(&json!({"length": 3}))), None);
        assert_eq!(length(Some(&json!(12))), None);
        assert_eq!(length(None), None);
    }
}
