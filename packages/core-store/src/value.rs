//! The Value type - the nodes of a store tree.
//!
//! A `Value::Map` is a branch: an insertion-ordered mapping to child nodes.
//! Every other variant is a leaf. Arrays count as leaves for addressing purposes
//! (paths never index into them) but may carry nested scalar data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered branch.
pub type Map = IndexMap<String, Value>;

/// A node in the store tree.
///
/// # Design Notes
///
/// - Uses `IndexMap` so sibling order is the order keys were first inserted
/// - Uses `i64` for integers and `f64` for everything else numeric
/// - Serializes untagged, so a `Value` maps one-to-one onto JSON
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Create an empty branch.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// True for null, booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Map(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Locate the first value below this container that is not scalar data.
    ///
    /// Empty sequences and empty sections (a map under a map) are accepted. An
    /// empty map held as a sequence element is an object with no keys rather
    /// than a section, and is reported. Returns the location relative to
    /// `self`, dot-joined, with array positions rendered as indices.
    pub fn find_non_scalar_leaf(&self) -> Option<String> {
        let mut trail = Vec::new();
        if self.walk_children(&mut trail) {
            Some(trail.join("."))
        } else {
            None
        }
    }

    fn walk_children(&self, trail: &mut Vec<String>) -> bool {
        let in_array = matches!(self, Value::Array(_));
        let children: Box<dyn Iterator<Item = (String, &Value)> + '_> = match self {
            Value::Map(map) => Box::new(map.iter().map(|(k, v)| (k.clone(), v))),
            Value::Array(arr) => Box::new(arr.iter().enumerate().map(|(i, v)| (i.to_string(), v))),
            _ => return false,
        };

        for (key, child) in children {
            trail.push(key);
            let bad = match child {
                Value::Map(map) if map.is_empty() => in_array,
                Value::Map(_) | Value::Array(_) => child.walk_children(trail),
                _ => false,
            };
            if bad {
                return true;
            }
            trail.pop();
        }
        false
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
