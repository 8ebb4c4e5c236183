//! Lookup keys and value-category tags.
//!
//! Decoded JSON mixes positional and named entries, so lookups take a [`Key`]
//! that carries either shape. Type checks go through [`ValueKind`], a closed
//! tag set with a discriminant-to-string mapping — classification is a match
//! on the value's variant, never reflection.

use std::fmt;

use serde_json::Value;

/// A lookup key into a decoded collection.
///
/// Arrays are addressed by position, objects by member name. Both convert
/// from the obvious Rust types, so call sites pass `0` or `"title"` directly:
///
/// ```rust
/// use array_inspector::ArrayInspector;
/// use serde_json::json;
///
/// let list = json!(["a", "b"]);
/// assert_eq!(ArrayInspector::new(&list).get_string(1), Some("b"));
///
/// let map = json!({"name": "a"});
/// assert_eq!(ArrayInspector::new(&map).get_string("name"), Some("a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Position within an array.
    Index(usize),
    /// Member name within an object.
    Name(&'a str),
}

impl From<usize> for Key<'static> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Runtime category of a decoded value.
///
/// The string forms (via [`ValueKind::as_str`]) follow the conventional
/// dynamic-language type names: `"NULL"`, `"boolean"`, `"integer"`,
/// `"double"`, `"string"`, `"array"`, `"object"`. Sequences and mappings are
/// distinct categories here because `serde_json` keeps them distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Double,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a value into its category tag.
    ///
    /// A number is `Integer` when representable as `i64`/`u64` and `Double`
    /// otherwise; the distinction is preserved at parse time, so `1` and
    /// `1.0` classify differently.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    ValueKind::Integer
                } else {
                    ValueKind::Double
                }
            }
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// The conventional dynamic-type name for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "NULL",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
