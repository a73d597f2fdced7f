// src/ingest/json.rs

use std::io::Read;

use tracing::debug;

use crate::course::CourseRecord;
use crate::errors::Result;

/// Read a JSON array of course record objects.
///
/// A record without `shorthand` fails the whole read.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<CourseRecord>> {
    let records: Vec<CourseRecord> = serde_json::from_reader(reader)?;
    debug!(records = records.len(), "read course records from JSON");
    Ok(records)
}
