// src/layout/mod.rs

//! Node placement.
//!
//! Courses are placed in one horizontal row per semester. See
//! [`semester::compute_layout`].

pub mod semester;

use std::collections::HashMap;

use serde::Serialize;

pub use semester::{compute_layout, group_by_semester, SemesterRow};

/// 2D coordinate of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Positions for every course of a graph, plus the semester rows they were
/// derived from.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: HashMap<String, Position>,
    rows: Vec<SemesterRow>,
}

impl Layout {
    pub(crate) fn new(positions: HashMap<String, Position>, rows: Vec<SemesterRow>) -> Self {
        Self { positions, rows }
    }

    pub fn position(&self, shorthand: &str) -> Option<Position> {
        self.positions.get(shorthand).copied()
    }

    /// Semester rows in order of first appearance.
    pub fn rows(&self) -> &[SemesterRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
