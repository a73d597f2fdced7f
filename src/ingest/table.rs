// src/ingest/table.rs

//! Delimited-text (CSV / TSV) reader.

use std::collections::BTreeMap;
use std::io::Read;

use tracing::{debug, warn};

use crate::config::model::InputSection;
use crate::course::record::whole_semester;
use crate::course::{AttrValue, CourseRecord};
use crate::errors::{PrelimineError, Result};
use crate::ingest::literal::PrerequisiteParser;
use crate::ingest::term::TermCodes;

const SHORTHAND_COLUMN: &str = "shorthand";
const SEMESTER_COLUMN: &str = "semester";

/// Column positions resolved from the header row.
struct Columns {
    shorthand: usize,
    prerequisites: Option<usize>,
    term: Option<usize>,
    semester: Option<usize>,
    names: Vec<String>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord, input: &InputSection) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let find = |wanted: &str| names.iter().position(|n| n == wanted);

        let shorthand = find(SHORTHAND_COLUMN).ok_or_else(|| PrelimineError::IngestError {
            row: 0,
            message: format!("missing required column '{SHORTHAND_COLUMN}'"),
        })?;

        let prerequisites = find(&input.prerequisite_column);
        let term = find(&input.term_column);
        let semester = find(SEMESTER_COLUMN);

        Ok(Self {
            shorthand,
            prerequisites,
            term,
            semester,
            names,
        })
    }

    /// Columns that are read into dedicated record fields rather than the
    /// attribute bag.
    fn is_structural(&self, idx: usize) -> bool {
        idx == self.shorthand || Some(idx) == self.prerequisites || Some(idx) == self.semester
    }
}

/// Read course records from delimited text.
///
/// Rows are numbered from 1, not counting the header.
pub fn read_table<R: Read>(reader: R, delimiter: u8, input: &InputSection) -> Result<Vec<CourseRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::resolve(&headers, input)?;
    if columns.prerequisites.is_none() {
        debug!(column = %input.prerequisite_column, "no prerequisite column; courses get no prerequisites");
    }

    let parser = PrerequisiteParser::new()?;
    let terms = TermCodes::new(input.term_codes.clone());

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let cells = result?;
        records.push(read_row(row, &cells, &columns, &parser, &terms)?);
    }

    debug!(rows = records.len(), "read course table");
    Ok(records)
}

fn read_row(
    row: usize,
    cells: &csv::StringRecord,
    columns: &Columns,
    parser: &PrerequisiteParser,
    terms: &TermCodes,
) -> Result<CourseRecord> {
    let cell = |idx: usize| cells.get(idx).unwrap_or("");

    let shorthand = cell(columns.shorthand).trim();
    if shorthand.is_empty() {
        return Err(PrelimineError::IngestError {
            row,
            message: format!("empty '{SHORTHAND_COLUMN}'"),
        });
    }

    let preliminary = match columns.prerequisites {
        Some(idx) => parser
            .parse(cell(idx))
            .map_err(|message| PrelimineError::IngestError { row, message })?,
        None => Vec::new(),
    };

    let semester = match (columns.term, columns.semester) {
        (Some(idx), _) => term_semester(row, shorthand, cell(idx), terms),
        (None, Some(idx)) => parse_semester(row, cell(idx))?,
        (None, None) => None,
    };

    let fields: BTreeMap<String, AttrValue> = columns
        .names
        .iter()
        .enumerate()
        .filter(|(idx, _)| !columns.is_structural(*idx))
        .map(|(idx, name)| (name.clone(), AttrValue::infer(cell(idx))))
        .collect();

    Ok(CourseRecord {
        shorthand: shorthand.to_string(),
        preliminary,
        semester,
        fields,
    })
}

fn term_semester(row: usize, shorthand: &str, code: &str, terms: &TermCodes) -> Option<u32> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    let semester = terms.semester_of(code);
    if semester.is_none() {
        warn!(row, course = shorthand, code, "unknown term code; semester left unset");
    }
    semester
}

fn parse_semester(row: usize, raw: &str) -> Result<Option<u32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(semester) = raw.parse::<u32>() {
        return Ok(Some(semester));
    }
    let message = match raw.parse::<f64>() {
        Ok(value) => match whole_semester(value) {
            Ok(semester) => return Ok(Some(semester)),
            Err(message) => message,
        },
        Err(_) => format!("semester must be a non-negative integer, got {raw:?}"),
    };
    Err(PrelimineError::IngestError { row, message })
}
