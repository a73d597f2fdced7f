// src/course/mod.rs

//! Course data model.
//!
//! - [`record`] is the input row shape produced by ingestion.
//! - [`attrs`] is the open attribute bag stored on every node.
//! - [`Course`] is the node type held by the graph.

pub mod attrs;
pub mod record;

pub use attrs::{normalize_key, AttrValue, Attributes};
pub use record::CourseRecord;

/// A course as stored in the graph: identity, effective semester, and all
/// attributes of the record that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    shorthand: String,
    semester: u32,
    attributes: Attributes,
}

impl Course {
    pub fn new(shorthand: impl Into<String>, semester: u32, attributes: Attributes) -> Self {
        Self {
            shorthand: shorthand.into(),
            semester,
            attributes,
        }
    }

    pub fn shorthand(&self) -> &str {
        &self.shorthand
    }

    pub fn semester(&self) -> u32 {
        self.semester
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Re-register this course from a later record with the same shorthand.
    ///
    /// Attributes from the later record win; keys it lacks are kept.
    pub(crate) fn overwrite(&mut self, semester: u32, attributes: Attributes) {
        self.semester = semester;
        self.attributes.merge(attributes);
    }
}
