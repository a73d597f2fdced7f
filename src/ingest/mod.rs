// src/ingest/mod.rs

//! Loading course records from files.
//!
//! The reader is picked from the file extension:
//! - `.csv` / `.tsv` go through [`table`], which parses the prerequisite
//!   list literal and maps term codes to semesters.
//! - `.json` goes through [`json`].

pub mod json;
pub mod literal;
pub mod table;
pub mod term;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::config::model::InputSection;
use crate::course::CourseRecord;
use crate::errors::{PrelimineError, Result};
use crate::types::InputFormat;

pub use literal::PrerequisiteParser;
pub use term::TermCodes;

/// Pick the input format from a path's extension.
pub fn detect_format(path: &Path) -> Result<InputFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => Ok(InputFormat::Csv),
        Some("tsv") | Some("tab") => Ok(InputFormat::Tsv),
        Some("json") => Ok(InputFormat::Json),
        _ => Err(PrelimineError::UnsupportedFormat(format!(
            "{path:?} (expected a .csv, .tsv or .json file)"
        ))),
    }
}

/// Read records of a known format from any reader.
pub fn read_records<R: Read>(
    reader: R,
    format: InputFormat,
    input: &InputSection,
) -> Result<Vec<CourseRecord>> {
    match format.delimiter() {
        Some(delimiter) => table::read_table(reader, delimiter, input),
        None => json::read_json(reader),
    }
}

/// Load records from a file on disk.
pub fn load_records(path: impl AsRef<Path>, input: &InputSection) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let records = read_records(BufReader::new(file), format, input)?;
    info!(?path, ?format, records = records.len(), "loaded course records");
    Ok(records)
}
