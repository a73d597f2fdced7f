#![allow(dead_code)]

use prelimine::config::{ConfigFile, RawConfigFile};
use prelimine::course::{AttrValue, CourseRecord};
use prelimine::types::Strictness;

/// Builder for `CourseRecord` to simplify test setup.
pub struct RecordBuilder {
    record: CourseRecord,
}

impl RecordBuilder {
    pub fn new(shorthand: &str) -> Self {
        Self {
            record: CourseRecord::new(shorthand),
        }
    }

    pub fn semester(mut self, semester: u32) -> Self {
        self.record.semester = Some(semester);
        self
    }

    pub fn after(mut self, prerequisite: &str) -> Self {
        self.record.preliminary.push(prerequisite.to_string());
        self
    }

    pub fn name(self, course_name: &str) -> Self {
        self.field("course_name", course_name)
    }

    pub fn professor(self, professor: &str) -> Self {
        self.field("professor", professor)
    }

    pub fn field(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.record.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> CourseRecord {
        self.record
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.config.config.strictness = strictness;
        self
    }

    pub fn label_columns(mut self, columns: &[&str]) -> Self {
        self.config.render.label_columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.config.render.title = title.to_string();
        self
    }

    pub fn annotation(mut self, text: &str) -> Self {
        self.config.render.annotation = Some(text.to_string());
        self
    }

    pub fn term_code(mut self, code: &str, semester: u32) -> Self {
        self.config.input.term_codes.insert(code.to_string(), semester);
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The six-course catalog used throughout the tests:
///
/// ```text
/// semester 1:  ITP
/// semester 2:  DST            (after ITP)
/// semester 3:  ALG OPS DBS    (ALG after DST, ITP; OPS, DBS after DST)
/// semester 4:  SWE            (after ALG, OPS, DBS)
/// ```
pub fn sample_catalog() -> Vec<CourseRecord> {
    vec![
        RecordBuilder::new("ITP")
            .name("Introduction to Programming")
            .semester(1)
            .professor("Dr. Smith")
            .build(),
        RecordBuilder::new("DST")
            .name("Data Structures")
            .after("ITP")
            .semester(2)
            .professor("Dr. Johnson")
            .build(),
        RecordBuilder::new("ALG")
            .name("Algorithms")
            .after("DST")
            .after("ITP")
            .semester(3)
            .professor("Dr. Williams")
            .build(),
        RecordBuilder::new("OPS")
            .name("Operating Systems")
            .after("DST")
            .semester(3)
            .professor("Dr. Brown")
            .build(),
        RecordBuilder::new("DBS")
            .name("Database Systems")
            .after("DST")
            .semester(3)
            .professor("Dr. Davis")
            .build(),
        RecordBuilder::new("SWE")
            .name("Software Engineering")
            .after("ALG")
            .after("OPS")
            .after("DBS")
            .semester(4)
            .professor("Dr. Miller")
            .build(),
    ]
}
