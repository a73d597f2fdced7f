// src/layout/semester.rs

use std::collections::HashMap;

use tracing::debug;

use crate::graph::CourseGraph;
use crate::layout::{Layout, Position};

/// Courses sharing one semester, in graph order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterRow {
    pub semester: u32,
    pub courses: Vec<String>,
}

/// Group courses by semester.
///
/// Rows appear in the order their semester is first seen while walking the
/// graph; courses within a row keep graph order. Nothing is sorted.
pub fn group_by_semester(graph: &CourseGraph) -> Vec<SemesterRow> {
    let mut rows: Vec<SemesterRow> = Vec::new();
    let mut row_of: HashMap<u32, usize> = HashMap::new();

    for course in graph.courses() {
        let semester = course.semester();
        let idx = *row_of.entry(semester).or_insert_with(|| {
            rows.push(SemesterRow {
                semester,
                courses: Vec::new(),
            });
            rows.len() - 1
        });
        rows[idx].courses.push(course.shorthand().to_string());
    }

    rows
}

/// Place every course of `graph`.
///
/// - `y = -semester`, so later semesters sit lower.
/// - In a row of `k` courses, the course at index `i` gets
///   `x = (i + 1) / (k + 1)`, which keeps every `x` strictly inside `(0, 1)`.
pub fn compute_layout(graph: &CourseGraph) -> Layout {
    let rows = group_by_semester(graph);
    let mut positions = HashMap::with_capacity(graph.node_count());

    for row in &rows {
        let y = -f64::from(row.semester);
        let x_step = 1.0 / (row.courses.len() as f64 + 1.0);
        for (i, shorthand) in row.courses.iter().enumerate() {
            let x = x_step * (i as f64 + 1.0);
            positions.insert(shorthand.clone(), Position::new(x, y));
        }
    }

    debug!(rows = rows.len(), nodes = positions.len(), "computed semester layout");
    Layout::new(positions, rows)
}
