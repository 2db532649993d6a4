//! Core value model: a closed union over the shapes the filters understand.
//!
//! Arbitrary host objects are covered by the [`OpaqueValue`] capability trait
//! rather than open-ended dynamic dispatch: an opaque value may report a
//! length, and renders to text for blankness checks.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Ordered list of values. Element order is significant and preserved by every filter.
pub type Sequence = Vec<Value>;

/// Insertion-ordered string-keyed mapping. Keys are never filtered, only values.
pub type Mapping = IndexMap<String, Value>;

/// Capability hook for values outside the built-in variant set.
///
/// Classification of an opaque value is structural: it is empty when it
/// reports a zero length, and blank when empty or when its [`fmt::Display`]
/// rendering trims to nothing. Types without a meaningful length keep the
/// default and are never considered empty.
pub trait OpaqueValue: fmt::Debug + fmt::Display + Send + Sync {
    /// Reported element or byte count, when the type has one.
    fn length(&self) -> Option<usize> {
        None
    }
}

/// A tree-shaped dynamic value: scalars, text, sequences, and mappings.
///
/// Values are immutable from the filters' point of view: every filtering
/// operation produces new containers and leaves its input untouched.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Seq(Sequence),
    Map(Mapping),
    Opaque(Arc<dyn OpaqueValue>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Builds a [`Value::Seq`] from anything iterable over values.
    pub fn seq<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Seq(items.into_iter().collect())
    }

    /// Builds a [`Value::Map`] from key/value pairs, preserving their order.
    pub fn map<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wraps a host object behind the opaque capability trait.
    pub fn opaque<T: OpaqueValue + 'static>(value: T) -> Value {
        Value::Opaque(Arc::new(value))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Opaque values have no structural equality; identity is the best we can do.
            (Value::Opaque(a), Value::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Sequence> for Value {
    fn from(items: Sequence) -> Self {
        Value::Seq(items)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Value::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Text(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Nil => serde_json::Value::Null,
            Value::Bool(b) => (*b).into(),
            Value::Int(i) => (*i).into(),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(f.to_string())),
            Value::Text(t) => serde_json::Value::String(t.clone()),
            Value::Seq(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Opaque(o) => serde_json::Value::String(o.to_string()),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(t) => serializer.serialize_str(t),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, val) in entries {
                    map.serialize_entry(key, val)?;
                }
                map.end()
            }
            Value::Opaque(o) => serializer.serialize_str(&o.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trip_preserves_mapping_order() {
        let input = json!({"z": 1, "a": null, "m": ["x", {"k": ""}]});
        let value = Value::from(input.clone());
        assert_eq!(serde_json::Value::from(&value), input);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }

    #[test]
    fn test_serialize_matches_json_conversion() {
        let value = Value::map([
            ("a", Value::from(1)),
            ("b", Value::Nil),
            ("c", Value::seq([Value::from(" "), Value::from(false)])),
        ]);
        let direct = serde_json::to_value(&value).unwrap();
        assert_eq!(direct, serde_json::Value::from(&value));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Nil.kind(), "nil");
        assert_eq!(Value::from(1).kind(), "int");
        assert_eq!(Value::seq([]).kind(), "sequence");
        assert_eq!(Value::map::<&str, _>([]).kind(), "mapping");
    }
}
