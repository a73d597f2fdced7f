// src/graph/mod.rs

//! Course dependency graph.
//!
//! - [`course_graph`] holds the insertion-ordered directed graph.
//! - [`builder`] turns course records into a graph, applying the
//!   order-dependent edge rule and the configured strictness.

pub mod builder;
pub mod course_graph;

pub use builder::{assemble, build_graph, BuildIssue, BuildReport, GraphBuilder};
pub use course_graph::CourseGraph;
