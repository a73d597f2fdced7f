// src/course/record.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::course::attrs::{AttrValue, Attributes};

/// One input row describing a course, as produced by ingestion.
///
/// Mirrors the JSON shape used by the sample catalog:
///
/// ```json
/// {
///   "shorthand": "DST",
///   "course_name": "Data Structures",
///   "preliminary": ["ITP"],
///   "semester": 2,
///   "professor": "Dr. Johnson"
/// }
/// ```
///
/// `shorthand` is the only required key. Everything that is not one of the
/// three structural keys lands in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique short code identifying the course.
    pub shorthand: String,

    /// Shorthands of the courses that must be taken first.
    #[serde(default)]
    pub preliminary: Vec<String>,

    /// Semester rank; `None` is defaulted to 0 by the graph builder.
    ///
    /// Integer-like values are accepted, so `3` and `3.0` are the same.
    #[serde(default, deserialize_with = "deserialize_semester")]
    pub semester: Option<u32>,

    /// Any other descriptive fields (`course_name`, `professor`, ...).
    #[serde(flatten)]
    pub fields: BTreeMap<String, AttrValue>,
}

impl CourseRecord {
    pub fn new(shorthand: impl Into<String>) -> Self {
        Self {
            shorthand: shorthand.into(),
            preliminary: Vec::new(),
            semester: None,
            fields: BTreeMap::new(),
        }
    }

    /// Every field of the record as node attributes, with `semester` set to
    /// the given effective value.
    pub fn to_attributes(&self, semester: u32) -> Attributes {
        let mut attrs: Attributes = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        attrs.insert("shorthand", self.shorthand.as_str());
        attrs.insert("preliminary", self.preliminary.clone());
        attrs.insert("semester", semester);
        attrs
    }
}

/// Convert a numeric semester to a rank. Only whole, non-negative values in
/// `u32` range are accepted.
pub fn whole_semester(value: f64) -> Result<u32, String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(format!("semester must be a whole number, got {value}"));
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(format!("semester must be a non-negative integer, got {value}"));
    }
    Ok(value as u32)
}

fn deserialize_semester<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(SemesterVisitor)
}

struct SemesterVisitor;

impl<'de> Visitor<'de> for SemesterVisitor {
    type Value = Option<u32>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative whole number or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .map(Some)
            .map_err(|_| E::custom(format!("semester {value} is out of range")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        if value < 0 {
            return Err(E::custom(format!(
                "semester must be a non-negative integer, got {value}"
            )));
        }
        self.visit_u64(value as u64)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        whole_semester(value).map(Some).map_err(E::custom)
    }
}
