// src/graph/builder.rs

//! Turn course records into a [`CourseGraph`].
//!
//! Records are processed strictly in input order. A prerequisite edge is only
//! added when the prerequisite course has already been registered, so a
//! course that is listed *after* the course requiring it never gets an edge.

use std::fmt;

use tracing::{debug, warn};

use crate::course::CourseRecord;
use crate::errors::{PrelimineError, Result};
use crate::graph::course_graph::{CourseGraph, Upsert};
use crate::types::Strictness;

/// Something the builder noticed while assembling the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildIssue {
    /// The record had no semester; 0 was used instead.
    MissingSemester { course: String },
    /// A prerequisite was not registered when the course was processed.
    DanglingPrerequisite { course: String, prerequisite: String },
    /// A record reused a shorthand that was already registered.
    DuplicateShorthand { course: String },
}

impl BuildIssue {
    /// Issues that abort the build in [`Strictness::Strict`].
    pub fn is_strict_violation(&self) -> bool {
        !matches!(self, BuildIssue::MissingSemester { .. })
    }
}

impl fmt::Display for BuildIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildIssue::MissingSemester { course } => {
                write!(f, "course '{course}' is missing a semester value")
            }
            BuildIssue::DanglingPrerequisite {
                course,
                prerequisite,
            } => write!(
                f,
                "course '{course}' lists prerequisite '{prerequisite}' which is not defined before it"
            ),
            BuildIssue::DuplicateShorthand { course } => {
                write!(f, "shorthand '{course}' is defined more than once")
            }
        }
    }
}

/// Graph plus everything the builder noticed on the way.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub graph: CourseGraph,
    pub issues: Vec<BuildIssue>,
}

/// Assemble the graph without any policy applied.
///
/// Missing semesters are logged as warnings here; the other issues are only
/// recorded.
pub fn assemble<'a, I>(records: I) -> BuildReport
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut graph = CourseGraph::new();
    let mut issues = Vec::new();

    for record in records {
        let semester = match record.semester {
            Some(s) => s,
            None => {
                warn!(course = %record.shorthand, "course is missing a semester value; using 0");
                issues.push(BuildIssue::MissingSemester {
                    course: record.shorthand.clone(),
                });
                0
            }
        };

        let attributes = record.to_attributes(semester);
        let upsert = graph.upsert(&record.shorthand, semester, attributes);
        if let Upsert::Overwrote(_) = upsert {
            issues.push(BuildIssue::DuplicateShorthand {
                course: record.shorthand.clone(),
            });
        }
        let to = upsert.index();

        for pre in &record.preliminary {
            match graph.index_of(pre) {
                Some(from) => {
                    graph.add_edge(from, to);
                }
                None => issues.push(BuildIssue::DanglingPrerequisite {
                    course: record.shorthand.clone(),
                    prerequisite: pre.clone(),
                }),
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        issues = issues.len(),
        "assembled course graph"
    );

    BuildReport { graph, issues }
}

/// Graph builder with a configurable policy for dangling prerequisites and
/// duplicate shorthands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    strictness: Strictness,
}

impl GraphBuilder {
    pub fn new(strictness: Strictness) -> Self {
        Self { strictness }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Build the graph. Only [`Strictness::Strict`] can fail, on the first
    /// dangling prerequisite or duplicate shorthand.
    pub fn build<'a, I>(&self, records: I) -> Result<CourseGraph>
    where
        I: IntoIterator<Item = &'a CourseRecord>,
    {
        let report = assemble(records);
        report_issues(&report.issues, self.strictness);

        if self.strictness == Strictness::Strict {
            if let Some(issue) = report.issues.iter().find(|i| i.is_strict_violation()) {
                return Err(PrelimineError::StrictViolation(issue.to_string()));
            }
        }

        Ok(report.graph)
    }
}

/// Build a graph with the default, lenient policy.
pub fn build_graph<'a, I>(records: I) -> CourseGraph
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let report = assemble(records);
    report_issues(&report.issues, Strictness::Lenient);
    report.graph
}

fn report_issues(issues: &[BuildIssue], strictness: Strictness) {
    for issue in issues.iter().filter(|i| i.is_strict_violation()) {
        match strictness {
            Strictness::Lenient => debug!(%issue, "ignored"),
            Strictness::Warn | Strictness::Strict => warn!(%issue, "graph input problem"),
        }
    }
}
