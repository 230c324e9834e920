//! # Transport-Neutral Values
//!
//! `ArgValue` is the tree of primitives that crosses the runtime boundary:
//! null, booleans, integers, floats, strings, ordered lists, and
//! string-keyed maps. It mirrors what a host method channel can carry
//! without reflection.
//!
//! Conversion to and from `serde_json::Value` is provided so that JSON
//! envelopes can be fed straight into the dispatcher.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

/// A string-keyed map of argument values.
pub type ArgMap = BTreeMap<String, ArgValue>;

/// A single transport-neutral value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ArgValue>),
    Map(ArgMap),
}

impl ArgValue {
    /// Short name of this value's shape, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            ArgValue::Null => "null",
            ArgValue::Bool(_) => "bool",
            ArgValue::Int(_) => "int",
            ArgValue::Float(_) => "float",
            ArgValue::String(_) => "string",
            ArgValue::List(_) => "list",
            ArgValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            ArgValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ArgMap> {
        match self {
            ArgValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ArgValue::Null)
    }

    /// Build a list of string values, preserving order.
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgValue::List(
            items
                .into_iter()
                .map(|s| ArgValue::String(s.into()))
                .collect(),
        )
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        ArgValue::Int(n)
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        ArgValue::Float(f)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::String(s)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(items: Vec<ArgValue>) -> Self {
        ArgValue::List(items)
    }
}

impl From<ArgMap> for ArgValue {
    fn from(map: ArgMap) -> Self {
        ArgValue::Map(map)
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ArgValue::Null,
            Value::Bool(b) => ArgValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ArgValue::Int(i),
                // u64 beyond i64::MAX and true floats both land here.
                None => n.as_f64().map_or(ArgValue::Null, ArgValue::Float),
            },
            Value::String(s) => ArgValue::String(s),
            Value::Array(items) => ArgValue::List(items.into_iter().map(ArgValue::from).collect()),
            Value::Object(map) => ArgValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, ArgValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ArgValue> for Value {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Null => Value::Null,
            ArgValue::Bool(b) => Value::Bool(b),
            ArgValue::Int(i) => Value::Number(i.into()),
            // JSON has no NaN or infinity.
            ArgValue::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            ArgValue::String(s) => Value::String(s),
            ArgValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ArgValue::Map(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_split_into_int_and_float() {
        assert_eq!(ArgValue::from(json!(7)), ArgValue::Int(7));
        assert_eq!(ArgValue::from(json!(-3)), ArgValue::Int(-3));
        assert_eq!(ArgValue::from(json!(1.5)), ArgValue::Float(1.5));
    }

    #[test]
    fn json_tree_converts_both_ways() {
        let original = json!({
            "zkeyPath": "test.zkey",
            "proofLib": 0,
            "flags": [true, null, "x"],
            "nested": {"k": [1, 2]}
        });
        let arg = ArgValue::from(original.clone());
        let map = arg.as_map().unwrap();
        assert_eq!(map["zkeyPath"].as_str(), Some("test.zkey"));
        assert_eq!(map["proofLib"].as_int(), Some(0));
        assert_eq!(map["flags"].as_list().unwrap().len(), 3);
        assert_eq!(Value::from(arg), original);
    }

    #[test]
    fn non_finite_float_becomes_json_null() {
        assert_eq!(Value::from(ArgValue::Float(f64::NAN)), Value::Null);
        assert_eq!(Value::from(ArgValue::Float(f64::INFINITY)), Value::Null);
    }

    #[test]
    fn accessors_reject_other_shapes() {
        let v = ArgValue::from("12");
        assert_eq!(v.kind(), "string");
        assert!(v.as_int().is_none());
        assert!(v.as_list().is_none());
        assert!(v.as_map().is_none());
        assert!(!v.is_null());
    }

    #[test]
    fn string_list_preserves_order() {
        let v = ArgValue::string_list(["b", "a", "c"]);
        let items: Vec<_> = v.as_list().unwrap().iter().filter_map(ArgValue::as_str).collect();
        assert_eq!(items, vec!["b", "a", "c"]);
    }
}
