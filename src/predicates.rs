//! Predicate bodies
//!
//! One pure function per test. These are the functions behind every call
//! surface; [`crate::is`] re-exports them together with their synonyms.

use crate::{TypoError, Value};
use std::cmp::Ordering;

/// Subject is not absent.
pub fn defined(x: &Value) -> bool {
    !x.is_undefined()
}

/// Subject is absent.
pub fn undefined(x: &Value) -> bool {
    x.is_undefined()
}

/// Subject is explicit null.
pub fn null(x: &Value) -> bool {
    x.is_null()
}

/// Subject is neither absent nor null.
pub fn set(x: &Value) -> bool {
    x.is_set()
}

/// Subject is absent or null.
pub fn unset(x: &Value) -> bool {
    !x.is_set()
}

/// Subject coerces to `true`.
pub fn truthy(x: &Value) -> bool {
    x.truthy()
}

/// Subject coerces to `false`.
pub fn falsey(x: &Value) -> bool {
    !x.truthy()
}

/// Subject is a boolean.
pub fn boolean(x: &Value) -> bool {
    matches!(x, Value::Bool(_))
}

/// Subject is a number, `NaN` included.
pub fn number(x: &Value) -> bool {
    matches!(x, Value::Number(_))
}

/// Subject is a number with no fractional part.
pub fn integer(x: &Value) -> bool {
    matches!(x, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
}

/// Subject is a string.
pub fn string(x: &Value) -> bool {
    matches!(x, Value::String(_))
}

/// Subject is a keyed structure: array, object, function or regexp.
pub fn object(x: &Value) -> bool {
    x.is_structured()
}

/// Subject is an object with no class anywhere in its prototype chain.
pub fn plain_object(x: &Value) -> bool {
    x.as_object().is_some_and(|o| o.is_plain())
}

/// Subject is a function.
pub fn function(x: &Value) -> bool {
    matches!(x, Value::Function(_))
}

/// Subject is an array.
pub fn array(x: &Value) -> bool {
    matches!(x, Value::Array(_))
}

/// Subject is set and has a non-negative numeric length.
pub fn array_like(x: &Value) -> bool {
    x.is_set() && x.length().is_some()
}

/// Subject is a regular expression.
pub fn reg_exp(x: &Value) -> bool {
    matches!(x, Value::RegExp(_))
}

/// Array-likes with no elements, or keyed structures with no own keys.
///
/// # Errors
///
/// `InvalidArgument` for subjects that are neither.
pub fn empty(x: &Value) -> Result<bool, TypoError> {
    if array_like(x) {
        Ok(x.length() == Some(0))
    } else if let Some(count) = x.own_key_count() {
        Ok(count == 0)
    } else {
        Err(TypoError::invalid_argument(format!(
            "can only check if objects or array-likes are empty, got {}",
            x.type_name()
        )))
    }
}

/// Negation of [`empty`].
///
/// # Errors
///
/// `InvalidArgument` for subjects that are neither array-like nor keyed.
pub fn not_empty(x: &Value) -> Result<bool, TypoError> {
    empty(x).map(|empty| !empty)
}

/// Strict equality.
pub fn is(x: &Value, y: &Value) -> bool {
    x.strict_eq(y)
}

/// Strict inequality.
pub fn isnt(x: &Value, y: &Value) -> bool {
    !x.strict_eq(y)
}

/// `x > y`.
pub fn gt(x: &Value, y: &Value) -> bool {
    x.compare(y) == Some(Ordering::Greater)
}

/// `x < y`.
pub fn lt(x: &Value, y: &Value) -> bool {
    x.compare(y) == Some(Ordering::Less)
}

/// `x >= y`.
pub fn gte(x: &Value, y: &Value) -> bool {
    matches!(x.compare(y), Some(Ordering::Greater | Ordering::Equal))
}

/// `x <= y`.
pub fn lte(x: &Value, y: &Value) -> bool {
    matches!(x.compare(y), Some(Ordering::Less | Ordering::Equal))
}

/// Subject has the key `y`, own or inherited.
pub fn has(x: &Value, y: &Value) -> bool {
    x.has_key(&y.to_string())
}

/// Subject, read as a sequence, holds `y` at some index.
pub fn contains(x: &Value, y: &Value) -> bool {
    x.contains_element(y)
}

/// Run a caller-supplied function on the subject.
///
/// # Errors
///
/// `InvalidArgument` when `y` is not a function.
pub fn test(x: &Value, y: &Value) -> Result<bool, TypoError> {
    match y {
        Value::Function(f) => Ok(f.call(x)),
        other => Err(TypoError::invalid_argument(format!(
            "custom tests must be functions, got {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Object;

    #[test]
    fn test_presence() {
        assert!(defined(&Value::Null));
        assert!(!defined(&Value::Undefined));
        assert!(undefined(&Value::Undefined));
        assert!(null(&Value::Null));
        assert!(!null(&Value::Undefined));
        assert!(set(&Value::from(0)));
        assert!(!set(&Value::Null));
        assert!(unset(&Value::Undefined));
    }

    #[test]
    fn test_type_tags() {
        assert!(boolean(&Value::from(false)));
        assert!(number(&Value::from(f64::NAN)));
        assert!(!number(&Value::from("1")));
        assert!(string(&Value::from("")));
        assert!(array(&Value::from([1])));
        assert!(function(&Value::function(|_| true)));
        assert!(reg_exp(&Value::regex("^a").unwrap()));
        assert!(!reg_exp(&Value::from("^a")));
    }

    #[test]
    fn test_integer() {
        assert!(integer(&Value::from(4)));
        assert!(integer(&Value::from(-4.0)));
        assert!(!integer(&Value::from(4.5)));
        assert!(!integer(&Value::from(f64::NAN)));
        assert!(!integer(&Value::from(f64::INFINITY)));
        assert!(!integer(&Value::from("4")));
    }

    #[test]
    fn test_object_family() {
        assert!(object(&Value::from([1])));
        assert!(object(&Value::object(Object::new())));
        assert!(object(&Value::function(|_| true)));
        assert!(!object(&Value::from("s")));
        assert!(!object(&Value::Null));

        assert!(plain_object(&Value::object(Object::new())));
        assert!(!plain_object(&Value::object(Object::instance_of("Date"))));
        assert!(!plain_object(&Value::from([1])));
    }

    #[test]
    fn test_array_like() {
        assert!(array_like(&Value::from([1, 2])));
        assert!(array_like(&Value::from("abc")));
        assert!(array_like(&Value::object(Object::new().with("length", 0))));
        assert!(!array_like(&Value::object(Object::new())));
        assert!(!array_like(&Value::from(3)));
        assert!(!array_like(&Value::Undefined));
    }

    #[test]
    fn test_empty() {
        assert_eq!(empty(&Value::from(Vec::<Value>::new())), Ok(true));
        assert_eq!(empty(&Value::from("")), Ok(true));
        assert_eq!(empty(&Value::object(Object::new())), Ok(true));
        assert_eq!(empty(&Value::object(Object::new().with("a", 1))), Ok(false));
        assert_eq!(not_empty(&Value::from([1])), Ok(true));
        assert!(empty(&Value::from(5)).unwrap_err().is_invalid_argument());
        assert!(not_empty(&Value::Undefined).is_err());
    }

    #[test]
    fn test_empty_ignores_inherited_keys() {
        let proto = Object::new().with("a", 1);
        let value = Value::object(Object::new().with_prototype(proto));
        assert_eq!(empty(&value), Ok(true));
    }

    #[test]
    fn test_comparisons() {
        let five = Value::from(5);
        assert!(gt(&five, &Value::from(4)));
        assert!(!gt(&five, &Value::from(5)));
        assert!(gte(&five, &Value::from(5)));
        assert!(lt(&five, &Value::from(6)));
        assert!(lte(&five, &Value::from(5)));
        assert!(!gte(&Value::Undefined, &Value::from(0)));
        assert!(!lte(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(gt(&Value::from("b"), &Value::from("a")));
    }

    #[test]
    fn test_equality() {
        assert!(is(&Value::from(3), &Value::from(3)));
        assert!(!is(&Value::from(3), &Value::from("3")));
        assert!(isnt(&Value::Null, &Value::Undefined));
    }

    #[test]
    fn test_has() {
        let value = Value::object(Object::new().with("a", 1).with("1", true));
        assert!(has(&value, &Value::from("a")));
        assert!(has(&value, &Value::from(1)));
        assert!(!has(&value, &Value::from("b")));
        assert!(has(&Value::from([9]), &Value::from(0)));
        assert!(!has(&Value::from(5), &Value::from("a")));
    }

    #[test]
    fn test_contains() {
        let list = Value::from([1, 2, 3]);
        assert!(contains(&list, &Value::from(2)));
        assert!(!contains(&list, &Value::from("2")));
        assert!(contains(&Value::from("abc"), &Value::from("b")));
        assert!(!contains(&Value::from(5), &Value::from(5)));
    }

    #[test]
    fn test_custom() {
        let positive = Value::function(|v| v.as_f64().is_some_and(|n| n > 0.0));
        assert_eq!(test(&Value::from(1), &positive), Ok(true));
        assert_eq!(test(&Value::from(-1), &positive), Ok(false));
        assert!(test(&Value::from(1), &Value::from(true))
            .unwrap_err()
            .is_invalid_argument());
    }
}
