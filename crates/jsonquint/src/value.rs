//! The materialized value tree and the builder capability it implements.
//!
//! The core parser never touches [`Value`] directly: the materializer is
//! written against the [`ValueBuilder`] capability set (make a literal,
//! append an array element, insert an object entry), and [`TreeBuilder`]
//! is the stock implementation producing this module's [`Value`].

use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// The mapping type used for [`Value::Object`].
pub type Map = BTreeMap<String, Value>;
/// The sequence type used for [`Value::Array`].
pub type Array = Vec<Value>;

/// A materialized JSON5 value.
///
/// # Examples
///
/// ```
/// use jsonquint::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert!(v.is_object());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean if this value is one, otherwise `None`.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(v) = self { Some(*v) } else { None }
    }

    /// Returns the number if this value is one, otherwise `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if let Self::Number(v) = self { Some(*v) } else { None }
    }

    /// Returns the string if this value is one, otherwise `None`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(v) = self { Some(v) } else { None }
    }

    /// Returns the array if this value is one, otherwise `None`.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(v) = self { Some(v) } else { None }
    }

    /// Returns the object if this value is one, otherwise `None`.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(v) = self { Some(v) } else { None }
    }
}

/// Construction capabilities the materializer needs from a value container.
///
/// The materializer builds whole trees through this interface alone, so any
/// container with literals, appendable arrays, and key/value insertion can
/// receive a parse. Insertion semantics (for instance the policy on
/// duplicate object keys) belong to the implementation.
pub trait ValueBuilder {
    /// The finished value type.
    type Value;
    /// Array state under construction.
    type Array;
    /// Object state under construction.
    type Object;

    /// The null value.
    fn null() -> Self::Value;
    /// A boolean value.
    fn boolean(value: bool) -> Self::Value;
    /// A numeric value.
    fn number(value: f64) -> Self::Value;
    /// A string value, escapes already decoded.
    fn string(value: String) -> Self::Value;

    /// An empty array under construction.
    fn new_array() -> Self::Array;
    /// Appends one element to an array under construction.
    fn append(array: &mut Self::Array, element: Self::Value);
    /// Seals an array into a finished value.
    fn finish_array(array: Self::Array) -> Self::Value;

    /// An empty object under construction.
    fn new_object() -> Self::Object;
    /// Inserts one member into an object under construction.
    fn insert(object: &mut Self::Object, key: String, value: Self::Value);
    /// Seals an object into a finished value.
    fn finish_object(object: Self::Object) -> Self::Value;
}

/// The stock [`ValueBuilder`] producing [`Value`] trees.
///
/// Duplicate object keys resolve to the last occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl ValueBuilder for TreeBuilder {
    type Value = Value;
    type Array = Array;
    type Object = Map;

    fn null() -> Value {
        Value::Null
    }

    fn boolean(value: bool) -> Value {
        Value::Boolean(value)
    }

    fn number(value: f64) -> Value {
        Value::Number(value)
    }

    fn string(value: String) -> Value {
        Value::String(value)
    }

    fn new_array() -> Array {
        Array::new()
    }

    fn append(array: &mut Array, element: Value) {
        array.push(element);
    }

    fn finish_array(array: Array) -> Value {
        Value::Array(array)
    }

    fn new_object() -> Map {
        Map::new()
    }

    fn insert(object: &mut Map, key: String, value: Value) {
        object.insert(key, value);
    }

    fn finish_object(object: Map) -> Value {
        Value::Object(object)
    }
}
