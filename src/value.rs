//! Dynamic subject values
//!
//! Every test in this crate inspects a [`Value`]: a dynamically typed datum with
//! the shape of a script-language value. Primitive payloads (`Bool`, `Number`,
//! `String`) compare by content; structured payloads (`Array`, `Object`,
//! `Function`, `RegExp`) are reference counted and compare by identity, which is
//! what strict equality means for them.
//!
//! # Example
//!
//! ```rust
//! use typo::{Object, Value};
//!
//! let user = Value::object(Object::new().with("name", "ada").with("age", 36));
//! assert!(user.has_key("name"));
//! assert_eq!(user.get("age"), Some(&Value::from(36)));
//!
//! let list = Value::from([1, 2, 3]);
//! assert_eq!(list.length(), Some(3));
//! assert!(list.truthy());
//! ```

use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::TypoError;

/// Largest length an array-like may report; longer lengths are clamped.
const MAX_LENGTH: f64 = 9_007_199_254_740_991.0;

/// A dynamically typed subject value.
///
/// `Undefined` is the "absent" marker and is distinct from the explicit
/// `Null`. `PartialEq` is strict equality: `NaN` is never equal to itself and
/// structured values are only equal to clones of the same allocation.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// No value at all.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Arc<Vec<Value>>),
    /// A keyed structure, possibly derived from a prototype.
    Object(Arc<Object>),
    /// A callable test.
    Function(Function),
    /// A compiled regular expression.
    RegExp(Arc<Regex>),
}

impl Value {
    /// Build an array value.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build an object value.
    pub fn object(object: Object) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Build a function value from a closure.
    ///
    /// ```rust
    /// use typo::Value;
    ///
    /// let even = Value::function(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
    /// assert_eq!(even.type_name(), "function");
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Value::Function(Function::new(f))
    }

    /// Compile `pattern` into a regular expression value.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(|re| Value::RegExp(Arc::new(re)))
    }

    /// The runtime tag of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::RegExp(_) => "regexp",
        }
    }

    /// Returns `true` for the absent marker.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` for explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` when the value is neither absent nor null.
    pub fn is_set(&self) -> bool {
        !self.is_undefined() && !self.is_null()
    }

    /// Returns `true` for values that behave as keyed structures.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::RegExp(_)
        )
    }

    /// The number payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The array payload, if any.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The object payload, if any.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The function payload, if any.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Boolean coercion.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsey; everything
    /// else, including empty arrays and objects, is truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::RegExp(_) => true,
        }
    }

    /// Strict equality: same tag and same content for primitives, same
    /// allocation for structured values.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::RegExp(a), Value::RegExp(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The length attribute of an array-like value.
    ///
    /// Arrays report their element count, strings their character count, and
    /// objects the value of a non-negative numeric `length` key, clamped to
    /// `2^53 - 1`. A fractional object length counts every index below it, so
    /// `2.5` yields `3`.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::String(s) => Some(s.chars().count()),
            Value::Object(object) => object_length(object).map(|n| n.ceil() as usize),
            _ => None,
        }
    }

    /// The elements of an array-like value in index order.
    ///
    /// Object slots missing below `length` read as `Undefined`. `None` when
    /// the value is not array-like.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the reported length is too large to hold in
    /// memory.
    pub fn elements(&self) -> Option<Result<Vec<Value>, TypoError>> {
        match self {
            Value::Array(items) => Some(Ok(items.to_vec())),
            Value::String(s) => Some(Ok(s.chars().map(|c| Value::String(c.to_string())).collect())),
            Value::Object(object) => {
                let len = self.length()?;
                let mut elements = Vec::new();
                if elements.try_reserve_exact(len).is_err() {
                    return Some(Err(TypoError::invalid_argument(format!(
                        "array-like length {} is too large to iterate",
                        len
                    ))));
                }
                elements.extend(
                    (0..len).map(|i| object.get(&i.to_string()).cloned().unwrap_or_default()),
                );
                Some(Ok(elements))
            }
            _ => None,
        }
    }

    /// Returns `true` when some present index of an array-like holds a value
    /// strictly equal to `needle`.
    ///
    /// Object array-likes are scanned by their index keys, never by counting
    /// up to `length`, so missing slots are skipped rather than read as
    /// `Undefined`.
    pub fn contains_element(&self, needle: &Value) -> bool {
        match self {
            Value::Array(items) => items.iter().any(|item| item.strict_eq(needle)),
            Value::String(s) => match needle {
                Value::String(n) => {
                    let mut chars = n.chars();
                    chars.next().is_some_and(|c| chars.next().is_none() && s.contains(c))
                }
                _ => false,
            },
            Value::Object(object) => {
                let Some(len) = object_length(object) else {
                    return false;
                };
                let len = len.trunc();
                object.chain_keys().any(|key| {
                    array_index(key).is_some_and(|i| (i as f64) < len)
                        && object.get(key).is_some_and(|item| item.strict_eq(needle))
                })
            }
            _ => false,
        }
    }

    /// Number of own enumerable keys of a keyed structure.
    pub fn own_key_count(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(object) => Some(object.own_len()),
            Value::Function(_) | Value::RegExp(_) => Some(0),
            _ => None,
        }
    }

    /// Property lookup on an object, walking its prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Key membership, own or inherited.
    ///
    /// Values that are not keyed structures have no keys.
    pub fn has_key(&self, key: &str) -> bool {
        match self {
            Value::Object(object) => object.has(key),
            Value::Array(items) => {
                key == "length" || array_index(key).is_some_and(|i| i < items.len())
            }
            Value::Function(_) => matches!(key, "length" | "name"),
            Value::RegExp(_) => matches!(key, "lastIndex" | "source" | "flags"),
            _ => false,
        }
    }

    /// Primitive conversion: structured values become their string form.
    pub fn to_primitive(&self) -> Value {
        if self.is_structured() {
            Value::String(self.to_string())
        } else {
            self.clone()
        }
    }

    /// Numeric conversion.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s),
            _ => self.to_primitive().to_number(),
        }
    }

    /// Relational comparison.
    ///
    /// Two strings (after primitive conversion) compare lexically; anything
    /// else compares numerically. `None` when either side is `NaN`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self.to_primitive(), other.to_primitive()) {
            (Value::String(a), Value::String(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_number().partial_cmp(&b.to_number()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if item.is_set() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Function(_) => f.write_str("function () { [native code] }"),
            Value::RegExp(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

fn object_length(object: &Object) -> Option<f64> {
    match object.get("length") {
        Some(Value::Number(n)) if n.is_finite() && *n >= 0.0 => Some(n.min(MAX_LENGTH)),
        _ => None,
    }
}

fn array_index(key: &str) -> Option<usize> {
    let index = key.parse::<usize>().ok()?;
    (index.to_string() == key).then_some(index)
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        let sign = if n < 0.0 { "-" } else { "" };
        // Shortest round-trip digits, then placed by the script-language rules:
        // plain notation for decimal exponents in [-7, 21), scientific otherwise.
        let scientific = format!("{:e}", n.abs());
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let k = digits.len() as i32;
        let point = exponent.parse::<i32>().unwrap_or(0) + 1;
        let body = if k <= point && point <= 21 {
            format!("{}{}", digits, "0".repeat((point - k) as usize))
        } else if 0 < point && point <= 21 {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{}.{}", whole, fraction)
        } else if -6 < point && point <= 0 {
            format!("0.{}{}", "0".repeat(-point as usize), digits)
        } else {
            let (lead, rest) = digits.split_at(1);
            let exp = point - 1;
            let sign = if exp < 0 { '-' } else { '+' };
            if rest.is_empty() {
                format!("{}e{}{}", lead, sign, exp.abs())
            } else {
                format!("{}.{}e{}{}", lead, rest, sign, exp.abs())
            }
        };
        format!("{}{}", sign, body)
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = s.get(..2).filter(|p| p.eq_ignore_ascii_case(prefix)) {
            return u64::from_str_radix(&s[digits.len()..], radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// A keyed structure with an optional class tag and prototype.
///
/// An object without a class anywhere in its prototype chain is a plain
/// object. Lookups fall through to the prototype when a key is not owned.
///
/// ```rust
/// use typo::Object;
///
/// let base = Object::new().with("greet", "hi");
/// let derived = Object::new().with("name", "ada").with_prototype(base);
///
/// assert!(derived.has("greet"));
/// assert_eq!(derived.own_len(), 1);
/// assert!(derived.is_plain());
/// assert!(!Object::instance_of("Point").is_plain());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Object {
    class: Option<String>,
    entries: BTreeMap<String, Value>,
    prototype: Option<Arc<Object>>,
}

impl Object {
    /// An empty plain object.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty object tagged as an instance of `class`.
    pub fn instance_of(class: impl Into<String>) -> Self {
        Object {
            class: Some(class.into()),
            ..Self::default()
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set the prototype this object inherits keys from.
    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(Arc::new(prototype));
        self
    }

    /// Insert an own entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Own or inherited lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .get(key)
            .or_else(|| self.prototype.as_ref().and_then(|p| p.get(key)))
    }

    /// Own or inherited membership.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Own entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn chain_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self), |object| object.prototype.as_deref())
            .flat_map(|object| object.entries.keys().map(String::as_str))
    }

    /// Number of own entries.
    pub fn own_len(&self) -> usize {
        self.entries.len()
    }

    /// The nearest class tag along the prototype chain.
    pub fn class_name(&self) -> Option<&str> {
        self.class
            .as_deref()
            .or_else(|| self.prototype.as_ref().and_then(|p| p.class_name()))
    }

    /// Returns `true` when no class is found along the prototype chain.
    pub fn is_plain(&self) -> bool {
        self.class_name().is_none()
    }
}

/// A shared callable used by the `test` predicate.
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Function {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Function(Arc::new(f))
    }

    /// Invoke the function with a subject.
    pub fn call(&self, value: &Value) -> bool {
        (self.0)(value)
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::array(items)
    }
}

/// `None` is the absent marker.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::object(object)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::RegExp(Arc::new(re))
    }
}
