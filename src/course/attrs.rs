// src/course/attrs.rs

//! Open key-value attribute bag attached to every course node.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attribute value.
///
/// Deserialization is untagged, so a JSON `null` becomes [`AttrValue::Empty`],
/// whole numbers become [`AttrValue::Integer`], and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Empty,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Infer a value from a raw table cell: integer, then float, then text.
    /// Blank cells are `Empty`.
    pub fn infer(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return AttrValue::Empty;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return AttrValue::Integer(n);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return AttrValue::Float(f);
            }
        }
        AttrValue::Text(cell.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AttrValue::Empty)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Empty => Ok(()),
            AttrValue::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            AttrValue::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" on whole floats.
            AttrValue::Float(x) => write!(f, "{x:?}"),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item {
                        AttrValue::Text(s) => write!(f, "'{s}'")?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Integer(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Integer(i64::from(n))
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items.into_iter().map(AttrValue::Text).collect())
    }
}

/// Turn a human-readable display name into the attribute key it refers to.
///
/// `"Course Name"` → `"course_name"`.
pub fn normalize_key(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "_")
}

/// Attribute bag keyed by raw field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.values.get(key)
    }

    /// Look up an attribute by display name (see [`normalize_key`]).
    pub fn lookup(&self, display_name: &str) -> Option<&AttrValue> {
        self.values.get(&normalize_key(display_name))
    }

    /// Overlay `other` on top of `self`. Keys present in both take the value
    /// from `other`; keys only in `self` are kept.
    pub fn merge(&mut self, other: Attributes) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
