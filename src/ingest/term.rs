// src/ingest/term.rs

use std::collections::BTreeMap;

/// Lookup from term code (`Pre`, `F1`, ...) to semester rank.
#[derive(Debug, Clone)]
pub struct TermCodes {
    codes: BTreeMap<String, u32>,
}

impl TermCodes {
    pub fn new(codes: BTreeMap<String, u32>) -> Self {
        Self { codes }
    }

    /// Semester for a code. Surrounding whitespace is ignored; case is not.
    pub fn semester_of(&self, code: &str) -> Option<u32> {
        self.codes.get(code.trim()).copied()
    }
}

impl Default for TermCodes {
    fn default() -> Self {
        Self::new(crate::config::model::default_term_codes())
    }
}
