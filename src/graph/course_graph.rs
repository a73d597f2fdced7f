// src/graph/course_graph.rs

use std::collections::HashMap;

use crate::course::{Attributes, Course};

/// Directed course graph keyed by shorthand.
///
/// Nodes keep the order in which they were first registered. Edges point from
/// a prerequisite to the course that requires it and are iterated grouped by
/// source node (in node order), then in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    nodes: Vec<Course>,
    index: HashMap<String, usize>,
    /// Outgoing edges per node, parallel to `nodes`.
    successors: Vec<Vec<usize>>,
    /// Incoming edges per node, parallel to `nodes`.
    predecessors: Vec<Vec<usize>>,
}

/// Outcome of registering a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Upsert {
    Inserted(usize),
    Overwrote(usize),
}

impl Upsert {
    pub(crate) fn index(self) -> usize {
        match self {
            Upsert::Inserted(i) | Upsert::Overwrote(i) => i,
        }
    }
}

impl CourseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course, or overwrite the attributes of an existing one with
    /// the same shorthand. An overwritten course keeps its original position
    /// and its edges.
    pub(crate) fn upsert(&mut self, shorthand: &str, semester: u32, attributes: Attributes) -> Upsert {
        if let Some(&idx) = self.index.get(shorthand) {
            self.nodes[idx].overwrite(semester, attributes);
            return Upsert::Overwrote(idx);
        }

        let idx = self.nodes.len();
        self.nodes.push(Course::new(shorthand, semester, attributes));
        self.successors.push(Vec::new());
        self.predecessors.push(Vec::new());
        self.index.insert(shorthand.to_string(), idx);
        Upsert::Inserted(idx)
    }

    /// Add `from -> to` unless it already exists. Returns whether an edge was
    /// added.
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if self.successors[from].contains(&to) {
            return false;
        }
        self.successors[from].push(to);
        self.predecessors[to].push(from);
        true
    }

    pub(crate) fn index_of(&self, shorthand: &str) -> Option<usize> {
        self.index.get(shorthand).copied()
    }

    pub fn contains(&self, shorthand: &str) -> bool {
        self.index.contains_key(shorthand)
    }

    pub fn course(&self, shorthand: &str) -> Option<&Course> {
        self.index_of(shorthand).map(|i| &self.nodes[i])
    }

    /// All courses in registration order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All edges as `(prerequisite, dependent)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.successors.iter().enumerate().flat_map(move |(from, tos)| {
            tos.iter()
                .map(move |&to| (self.nodes[from].shorthand(), self.nodes[to].shorthand()))
        })
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.successors[f].contains(&t),
            _ => false,
        }
    }

    /// Direct prerequisites of a course (edges pointing into it).
    pub fn prerequisites_of(&self, shorthand: &str) -> Vec<&str> {
        self.index_of(shorthand)
            .map(|i| {
                self.predecessors[i]
                    .iter()
                    .map(|&p| self.nodes[p].shorthand())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Direct dependents of a course (edges leaving it).
    pub fn dependents_of(&self, shorthand: &str) -> Vec<&str> {
        self.index_of(shorthand)
            .map(|i| {
                self.successors[i]
                    .iter()
                    .map(|&s| self.nodes[s].shorthand())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Effective semester of every course, in node order.
    pub fn semesters(&self) -> Vec<u32> {
        self.nodes.iter().map(Course::semester).collect()
    }
}
