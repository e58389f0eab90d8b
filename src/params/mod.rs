//! Rendering parameters.
//!
//! - [`Params`] - Unordered key/value map of rendering directives
//! - [`ParamValue`] - Scalar or list parameter value

use std::collections::BTreeMap;
use std::fmt;

/// A single rendering-parameter value.
///
/// Values are scalars (string, integer, float) or lists. Lists are flattened
/// at render time by joining their elements with a literal comma, which is
/// how multi-valued directives (e.g. `auto=compress,format`) travel in a
/// query string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A string value, rendered as-is before encoding.
    Str(String),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A list value, flattened with commas at render time.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Renders the value to the raw (pre-encoding) query-string text.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Str(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::Float(f) => f.to_string(),
            ParamValue::List(items) => items
                .iter()
                .map(ParamValue::render)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    // Truthiness in the sense the srcset mode decision uses: zero and the
    // empty string do not count as a usable dimension.
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Str(s) => !s.is_empty() && s != "0",
            ParamValue::Int(i) => *i != 0,
            ParamValue::Float(f) => *f != 0.0,
            ParamValue::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Float(f)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// An unordered mapping of rendering-parameter keys to values.
///
/// Keys are unique; setting a key again replaces its value. Iteration order
/// is byte-wise ascending by key, which makes the encoded query string
/// deterministic regardless of insertion order.
///
/// # Example
///
/// ```
/// use pixurl::Params;
///
/// let params = Params::new().set("w", 100).set("h", 100);
/// assert_eq!(params.len(), 2);
/// assert!(params.contains("w"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning the map for chaining.
    ///
    /// # Example
    ///
    /// ```
    /// use pixurl::Params;
    ///
    /// let params = Params::new()
    ///     .set("w", 640)
    ///     .set("auto", vec!["compress", "format"]);
    /// ```
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a parameter, returning its previous value if present.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in byte-wise ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // A dimension parameter counts only when present with a truthy value.
    pub(crate) fn has_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(ParamValue::is_truthy)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
