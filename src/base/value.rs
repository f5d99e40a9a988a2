//! Generic structured value tree.
//!
//! Every parser produces a [`Value`] and every translator consumes one. The
//! tree is owned: objects own their members, arrays own their elements, and
//! subtrees are moved in and out of translators.
//!
//! ```text
//! Value
//! ├── String / Integer / Double / Boolean   (leaves)
//! ├── Object: IndexMap<String, Value>       (keys unique, insertion order kept)
//! └── Array:  Vec<Value>                    (order meaningful)
//! ```
//!
//! Reads go through the [`Fields`] trait, which treats a missing member as
//! its type's default (`""`, `0`, `0.0`, `false`). Numeric reads coerce
//! between integers, doubles, booleans and numeric-looking strings.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::text::{leading_f64, leading_i64};

/// Ordered mapping of keys to values.
pub type Object = IndexMap<String, Value>;

/// A node of the structured value tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Object(Object),
    Array(Vec<Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Object(Object::new())
    }
}

impl Value {
    /// An empty object.
    pub fn object() -> Self {
        Self::default()
    }

    /// Parse JSON text into a value tree.
    ///
    /// JSON `null` has no counterpart in the tree: null members and null
    /// array elements are dropped, and a `null` document becomes an empty
    /// object.
    pub fn parse_json(input: &str) -> Result<Self, serde_json::Error> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from_json(json).unwrap_or_default())
    }

    /// Convert a `serde_json` value. Returns `None` for `null`.
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;

        Some(match json {
            Json::Null => return None,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Double(n.as_f64().unwrap_or(0.0)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().filter_map(Self::from_json).collect()),
            Json::Object(members) => Value::Object(
                members
                    .into_iter()
                    .filter_map(|(k, v)| Self::from_json(v).map(|v| (k, v)))
                    .collect(),
            ),
        })
    }

    /// Convert into a `serde_json` value. Non-finite doubles become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Value::String(s) => Json::String(s.clone()),
            Value::Integer(i) => Json::from(*i),
            Value::Double(d) => serde_json::Number::from_f64(*d).map_or(Json::Null, Json::Number),
            Value::Boolean(b) => Json::Bool(*b),
            Value::Object(members) => Json::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The array payload. Any other value is replaced by an empty array
    /// first.
    pub fn make_array(&mut self) -> &mut Vec<Value> {
        match self {
            Value::Array(items) => items,
            other => {
                *other = Value::Array(Vec::new());
                other.make_array()
            }
        }
    }

    /// The object payload. Any other value is replaced by an empty object
    /// first.
    pub fn make_object(&mut self) -> &mut Object {
        match self {
            Value::Object(members) => members,
            other => {
                *other = Value::object();
                other.make_object()
            }
        }
    }

    /// The string payload, only for `String` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of a scalar. Doubles truncate, booleans map to 0/1 and
    /// strings are read like C `atoi`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Double(d) => Some(*d as i64),
            Value::Boolean(b) => Some(i64::from(*b)),
            Value::String(s) => Some(leading_i64(s)),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    /// Floating point view of a scalar. Strings are read like C `atof`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Double(d) => Some(*d),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => Some(leading_f64(s)),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Integer(i) => Some(*i != 0),
            Value::Double(d) => Some(*d != 0.0),
            Value::String(s) => Some(s == "true" || leading_i64(s) != 0),
            Value::Object(_) | Value::Array(_) => None,
        }
    }

    /// Render a scalar as text. Containers render as the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Object(_) | Value::Array(_) => String::new(),
        }
    }

    /// Member lookup; `None` unless this is an object holding `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|o| o.get_mut(key))
    }

    /// Set a member. A non-object value is replaced by an empty object first.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.make_object().insert(key.into(), value.into());
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from_json(json).unwrap_or_default())
    }
}

// ============================================================================
// FIELD ACCESS
// ============================================================================

/// Defaulting member access shared by [`Value`] and [`Object`].
pub trait Fields {
    fn field(&self, key: &str) -> Option<&Value>;

    fn has(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// String member, or `""` when missing or not a string.
    fn get_str(&self, key: &str) -> &str {
        self.field(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Any scalar member rendered as text, or `""`.
    fn get_text(&self, key: &str) -> String {
        self.field(key).map(Value::to_text).unwrap_or_default()
    }

    fn get_int(&self, key: &str) -> i64 {
        self.field(key).and_then(Value::as_i64).unwrap_or(0)
    }

    fn get_double(&self, key: &str) -> f64 {
        self.field(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    fn get_bool(&self, key: &str) -> bool {
        self.field(key).and_then(Value::as_bool).unwrap_or(false)
    }

    fn get_object(&self, key: &str) -> Option<&Object> {
        self.field(key).and_then(Value::as_object)
    }

    /// Array member, or an empty slice.
    fn get_array(&self, key: &str) -> &[Value] {
        self.field(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Fields for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl Fields for Object {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

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

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Vec<Value>> for Value {
    fn from(a: Vec<Value>) -> Self {
        Value::Array(a)
    }
}
