//! The inspector view: typed, panic-free accessors over a borrowed value.
//!
//! [`ArrayInspector`] wraps a `&Value` and never mutates or clones it. Every
//! getter is a pure function of the wrapped value and the key; a miss of any
//! kind (absent key, wrong type) produces `None` or an empty collection, and
//! no operation panics or returns an error.

use serde_json::Value;

use crate::types::{Key, ValueKind};

/// Shared fallback for lookups that must always yield a collection.
static EMPTY: Value = Value::Array(Vec::new());

/// A read-only typed view over decoded JSON data.
///
/// Wraps a borrowed [`Value`] — usually an object or array fresh out of a
/// decoder. Wrapping a scalar is allowed and behaves as an empty collection.
/// The view is `Copy`; nested lookups via [`ArrayInspector::get_array`]
/// return further views borrowing from the same root, so recursive
/// inspection never allocates.
///
/// ```rust
/// use array_inspector::ArrayInspector;
/// use serde_json::json;
///
/// let data = json!({"meta": {"pages": 3}});
/// let inspector = ArrayInspector::new(&data);
/// assert_eq!(inspector.get_array("meta").get_integer("pages"), Some(3));
/// assert_eq!(inspector.get_array("absent").len(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayInspector<'a> {
    data: &'a Value,
}

impl<'a> ArrayInspector<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self { data }
    }

    /// The wrapped value, verbatim.
    pub fn value(&self) -> &'a Value {
        self.data
    }

    /// Number of entries in the wrapped collection. Scalars count as zero.
    pub fn len(&self) -> usize {
        match self.data {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw lookup without any type check.
    ///
    /// [`Key::Index`] addresses array elements; [`Key::Name`] addresses
    /// object members. An index against an object falls back to the decimal
    /// member name, since decoded objects may carry numeric keys.
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&'a Value> {
        match (self.data, key.into()) {
            (Value::Array(items), Key::Index(index)) => items.get(index),
            (Value::Object(members), Key::Name(name)) => members.get(name),
            (Value::Object(members), Key::Index(index)) => {
                members.get(index.to_string().as_str())
            }
            _ => None,
        }
    }

    /// Category tag of the value at `key`. An absent key resolves to
    /// [`ValueKind::Null`], indistinguishable from a stored null.
    pub fn kind_of<'k>(&self, key: impl Into<Key<'k>>) -> ValueKind {
        self.get(key).map_or(ValueKind::Null, ValueKind::of)
    }

    /// Whether the value at `key` has exactly the given category.
    ///
    /// ```rust
    /// use array_inspector::{ArrayInspector, ValueKind};
    /// use serde_json::json;
    ///
    /// let data = json!({"count": 100, "ratio": 0.5});
    /// let inspector = ArrayInspector::new(&data);
    /// assert!(inspector.has("count", ValueKind::Integer));
    /// assert!(inspector.has("ratio", ValueKind::Double));
    /// assert!(inspector.has("absent", ValueKind::Null));
    /// assert!(!inspector.has("count", ValueKind::String));
    /// ```
    pub fn has<'k>(&self, key: impl Into<Key<'k>>, kind: ValueKind) -> bool {
        self.kind_of(key) == kind
    }

    /// The nested collection at `key`, wrapped for further inspection.
    ///
    /// Absent keys and scalar values yield a view over a shared empty
    /// collection — never an absence marker — so chained lookups read
    /// straight through missing intermediate levels.
    pub fn get_array<'k>(&self, key: impl Into<Key<'k>>) -> ArrayInspector<'a> {
        let value = match self.get(key) {
            Some(value @ (Value::Array(_) | Value::Object(_))) => value,
            _ => &EMPTY,
        };
        ArrayInspector::new(value)
    }

    /// The string at `key`, or `None` when absent or of any other type.
    /// No coercion: a stored number is not a string.
    pub fn get_string<'k>(&self, key: impl Into<Key<'k>>) -> Option<&'a str> {
        self.get(key)?.as_str()
    }

    /// The integer at `key`, or `None` when absent or of any other type.
    /// No coercion: neither `"1"` nor `1.0` is an integer.
    pub fn get_integer<'k>(&self, key: impl Into<Key<'k>>) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    /// The string at `key`, trimmed of surrounding whitespace, when the
    /// trimmed result is non-empty. Absent keys, non-string values, and
    /// blank strings all yield `None`.
    pub fn get_non_empty_string<'k>(&self, key: impl Into<Key<'k>>) -> Option<&'a str> {
        let trimmed = self.get_string(key)?.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// The integer at `key` when strictly greater than zero. Zero and
    /// negative values are treated as absent.
    pub fn get_positive_integer<'k>(&self, key: impl Into<Key<'k>>) -> Option<i64> {
        self.get_integer(key).filter(|n| *n > 0)
    }

    /// Insertion-order filter-map over the wrapped collection's entries.
    ///
    /// `action` runs once per entry; `Some` results are collected in
    /// iteration order and `None` results are dropped, so the output
    /// preserves the relative order of the entries that produced it. Object
    /// members iterate in insertion order (the underlying map preserves it);
    /// array elements iterate by position. A scalar-wrapped view yields
    /// nothing.
    ///
    /// ```rust
    /// use array_inspector::ArrayInspector;
    /// use serde_json::json;
    ///
    /// let data = json!([1, "zebra", false, "apple"]);
    /// let strings = ArrayInspector::new(&data).each(|_, value| value.as_str());
    /// assert_eq!(strings, vec!["zebra", "apple"]);
    /// ```
    pub fn each<T, F>(&self, mut action: F) -> Vec<T>
    where
        F: FnMut(Key<'a>, &'a Value) -> Option<T>,
    {
        match self.data {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(index, value)| action(Key::Index(index), value))
                .collect(),
            Value::Object(members) => members
                .iter()
                .filter_map(|(name, value)| action(Key::Name(name), value))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl<'a> From<&'a Value> for ArrayInspector<'a> {
    fn from(data: &'a Value) -> Self {
        Self::new(data)
    }
}
