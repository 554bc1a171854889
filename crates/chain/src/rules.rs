//! Built-in predicate library
//!
//! Every function here is pure and total: it never panics and answers
//! `false` for inputs of the wrong kind. Parameterized predicates take their
//! parameters first so they can be captured by a closure before being
//! attached to a chain:
//!
//! ```
//! use nebula_chain::rules;
//! use serde_json::json;
//!
//! let at_least_ten = |v: Option<&serde_json::Value>| rules::gte(10.0, v);
//! assert!(at_least_ten(Some(&json!(12))));
//! assert!(!at_least_ten(Some(&json!("12"))));
//! ```

use serde_json::Value;

use crate::value::{as_number, length};

// ============================================================================
// TYPE CHECKS
// ============================================================================

/// Returns `true` if the value is a string.
pub fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

/// Returns `true` if the value is a number.
pub fn is_number(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(_)))
}

/// Returns `true` if the value is a boolean.
pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

/// Returns `true` if the value is an object or an array.
pub fn is_object(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Object(_) | Value::Array(_)))
}

/// Returns `true` if the value is an explicit `null`.
pub fn is_null(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Null))
}

/// Returns `true` if the value is present (it may still be `null`).
pub fn is_defined(value: Option<&Value>) -> bool {
    value.is_some()
}

/// Returns `true` if the value is absent.
pub fn is_undefined(value: Option<&Value>) -> bool {
    value.is_none()
}

/// Returns `true` if the value is absent or `null`.
pub fn is_none(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Returns `true` if the value is present and not `null`.
pub fn is_not_none(value: Option<&Value>) -> bool {
    !is_none(value)
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Returns `true` if the value is present and equal to `reference`.
///
/// Numbers compare by value, so `1` equals `1.0`. Everything else compares
/// structurally.
pub fn eq(reference: &Value, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };

    match (as_number(Some(reference)), as_number(Some(value))) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => value == reference,
    }
}

/// Returns `true` unless the value is present and equal to `reference`.
pub fn ne(reference: &Value, value: Option<&Value>) -> bool {
    !eq(reference, value)
}

// ============================================================================
// NUMERIC COMPARISONS
// ============================================================================

/// Returns `true` if the value is a number greater than `threshold`.
pub fn gt(threshold: f64, value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| threshold < n)
}

/// Returns `true` if the value is a number greater than or equal to `threshold`.
pub fn gte(threshold: f64, value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| threshold <= n)
}

/// Returns `true` if the value is a number less than `threshold`.
pub fn lt(threshold: f64, value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| n < threshold)
}

/// Returns `true` if the value is a number less than or equal to `threshold`.
pub fn lte(threshold: f64, value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| n <= threshold)
}

/// Returns `true` if the value is a number in `minimum..=maximum`.
pub fn between(minimum: f64, maximum: f64, value: Option<&Value>) -> bool {
    as_number(value).is_some_and(|n| minimum <= n && n <= maximum)
}

// ============================================================================
// LENGTH CHECKS
// ============================================================================

/// Returns `true` if the string or array has at least `min` elements.
pub fn min_length(min: usize, value: Option<&Value>) -> bool {
    length(value).is_some_and(|len| len >= min)
}

/// Returns `true` if the string or array has at most `max` elements.
pub fn max_length(max: usize, value: Option<&Value>) -> bool {
    length(value).is_some_and(|len| len <= max)
}

/// Returns `true` if the string or array has exactly `expected` elements.
pub fn strict_length(expected: usize, value: Option<&Value>) -> bool {
    length(value) == Some(expected)
}

/// Returns `true` if the string or array length is in `minimum..=maximum`.
pub fn length_between(minimum: usize, maximum: usize, value: Option<&Value>) -> bool {
    length(value).is_some_and(|len| minimum <= len && len <= maximum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("text"), true)]
    #[case(json!(""), true)]
    #[case(json!(1), false)]
    #[case(json!(null), false)]
    fn test_is_string(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(is_string(Some(&input)), expected);
    }

    #[rstest]
    #[case(json!(42), true)]
    #[case(json!(-0.5), true)]
    #[case(json!("42"), false)]
    #[case(json!({}), false)]
    #[case(json!(true), false)]
    fn test_is_number(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(is_number(Some(&input)), expected);
    }

    #[test]
    fn test_is_boolean() {
        assert!(is_boolean(Some(&json!(true))));
        assert!(is_boolean(Some(&json!(false))));
        assert!(!is_boolean(Some(&json!(1))));
        assert!(!is_boolean(Some(&json!(""))));
        assert!(!is_boolean(Some(&Value::Null)));
    }

    #[test]
    fn test_is_object_accepts_arrays() {
        assert!(is_object(Some(&json!({}))));
        assert!(is_object(Some(&json!([1, 2]))));
        assert!(!is_object(Some(&Value::Null)));
        assert!(!is_object(Some(&json!(""))));
        assert!(!is_object(None));
    }

    #[test]
    fn test_presence_checks() {
        let null = Value::Null;
        let zero = json!(0);

        assert!(!is_defined(None));
        assert!(is_defined(Some(&null)));
        assert!(is_defined(Some(&zero)));

        assert!(is_undefined(None));
        assert!(!is_undefined(Some(&null)));

        assert!(is_none(None));
        assert!(is_none(Some(&null)));
        assert!(!is_none(Some(&json!(false))));

        assert!(!is_not_none(None));
        assert!(!is_not_none(Some(&null)));
        assert!(is_not_none(Some(&json!(""))));
    }

    #[test]
    fn test_null_is_not_absent() {
        assert!(is_null(Some(&Value::Null)));
        assert!(!is_null(None));
        assert!(!is_null(Some(&json!(42))));
    }

    #[test]
    fn test_equality() {
        let reference = json!(24);
        assert!(eq(&reference, Some(&json!(24))));
        assert!(!eq(&reference, Some(&json!(42))));
        assert!(!eq(&reference, Some(&json!("24"))));
        assert!(!eq(&reference, None));

        assert!(ne(&reference, Some(&json!("24"))));
        assert!(ne(&reference, None));
        assert!(!ne(&reference, Some(&json!(24))));
    }

    #[rstest]
    #[case(json!(1), json!(1.0), true)]
    #[case(json!(1.0), json!(1), true)]
    #[case(json!(40), json!(40.0), true)]
    #[case(json!(-3), json!(-3.0), true)]
    #[case(json!(1), json!(1.5), false)]
    #[case(json!(1), json!("1"), false)]
    #[case(json!([1, 2]), json!([1, 2]), true)]
    #[case(json!({"a": 1}), json!({"a": 2}), false)]
    fn test_numbers_compare_by_value(
        #[case] reference: Value,
        #[case] value: Value,
        #[case] equal: bool,
    ) {
        assert_eq!(eq(&reference, Some(&value)), equal);
        assert_eq!(ne(&reference, Some(&value)), !equal);
    }

    #[test]
    fn test_comparisons_reject_non_numbers() {
        assert!(gt(-1.0, Some(&json!(-0.5))));
        assert!(!gt(10.0, Some(&json!(10))));
        assert!(gte(10.0, Some(&json!(10))));
        assert!(lt(101.0, Some(&json!(100))));
        assert!(lte(100.0, Some(&json!(100))));
        assert!(!lte(100.0, Some(&json!("50"))));
        assert!(!gte(0.0, None));
    }

    #[rstest]
    #[case(json!(0), true)]
    #[case(json!(100), true)]
    #[case(json!(-1), false)]
    #[case(json!(120), false)]
    #[case(json!(null), false)]
    fn test_between_inclusive(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(between(0.0, 100.0, Some(&input)), expected);
    }

    #[test]
    fn test_length_checks() {
        let word = json!("hello");
        let list = json!([1, 2, 3]);

        assert!(min_length(5, Some(&word)));
        assert!(!min_length(6, Some(&word)));
        assert!(max_length(3, Some(&list)));
        assert!(!max_length(2, Some(&list)));
        assert!(strict_length(5, Some(&word)));
        assert!(!strict_length(4, Some(&word)));
        assert!(length_between(2, 10, Some(&word)));
        assert!(!length_between(4, 10, Some(&list)));
    }

    #[test]
    fn test_length_checks_reject_lengthless_values() {
        assert!(!min_length(0, Some(&json!(42))));
        assert!(!max_length(10, None));
        assert!(!strict_length(0, Some(&json!({}))));
        assert!(!length_between(0, 10, Some(&Value::Null)));
    }
}
