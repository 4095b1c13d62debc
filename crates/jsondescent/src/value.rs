//! Parsed value types.
//!
//! This module defines the [`Value`] enum produced by the parser, and its
//! compact textual rendering.
use core::{fmt, ops::Index};

use indexmap::IndexMap;

/// Object members, iterated in the order their keys first appeared.
pub type Map = IndexMap<String, Value>;
/// Array elements in source order.
pub type Array = Vec<Value>;

/// A value of the restricted JSON grammar.
///
/// Strings hold only ASCII letters, digits, space and the punctuation
/// `! # $ % & ' ( ) * + , - . /`, and integers are never negative. Values
/// built by hand may break those rules; [`Display`](fmt::Display) renders
/// them as-is.
///
/// # Examples
///
/// ```
/// use jsondescent::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::from("value"));
/// map.insert("n".to_string(), Value::Integer(7));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value","n":7}"#);
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A run of decimal digits.
    Integer(i64),
    /// A quoted run of allowed characters, without the quotes.
    String(String),
    /// `[...]`
    Array(Array),
    /// `{...}`; a repeated key keeps its first position and its last value.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
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
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
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

    /// Returns the boolean, or `None` for any other kind of value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, or `None` for any other kind of value.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string contents, or `None` for any other kind of value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, or `None` for any other kind of value.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns the members, or `None` for any other kind of value.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the value's kind, e.g. `"integer"` or `"object"`.
    ///
    /// ```
    /// use jsondescent::Value;
    ///
    /// assert_eq!(Value::Array(vec![]).type_name(), "array");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

static NULL: Value = Value::Null;

/// Looks up an object member; yields [`Value::Null`] when `self` is not an
/// object or has no such key.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.as_object().and_then(|map| map.get(key)).unwrap_or(&NULL)
    }
}

/// Looks up an array element; yields [`Value::Null`] when `self` is not an
/// array or the index is out of bounds.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.as_array().and_then(|arr| arr.get(index)).unwrap_or(&NULL)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            // The grammar has no escapes, so strings are written verbatim.
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{k}\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_insertion_order() {
        let mut map = Map::new();
        map.insert("z".into(), Value::Integer(1));
        map.insert("a".into(), Value::Array(vec![Value::Null, true.into()]));
        map.insert("m".into(), Value::from("x y"));
        assert_eq!(
            Value::Object(map).to_string(),
            r#"{"z":1,"a":[null,true],"m":"x y"}"#
        );
    }

    #[test]
    fn accessors_match_variant() {
        let v = Value::Integer(5);
        assert!(v.is_integer());
        assert_eq!(v.as_i64(), Some(5));
        assert_eq!(v.as_str(), None);
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert!(Value::default().is_null());
        assert!(Value::Object(Map::new()).as_object().is_some_and(Map::is_empty));
        assert!(Value::Array(vec![]).as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn indexing_falls_back_to_null() {
        let mut map = Map::new();
        map.insert("list".into(), Value::Array(vec![Value::Integer(3)]));
        let v = Value::Object(map);
        assert_eq!(v["list"][0], Value::Integer(3));
        assert_eq!(v["list"][1], Value::Null);
        assert_eq!(v["missing"]["deeper"], Value::Null);
        assert_eq!(v[0], Value::Null);
    }

    #[test]
    fn serializes_as_plain_json() {
        let v = Value::Array(vec![
            Value::Integer(1),
            Value::from("a"),
            Value::Null,
            Value::Object([("k".to_string(), Value::Boolean(true))].into_iter().collect()),
        ]);
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"[1,"a",null,{"k":true}]"#
        );
    }
}
