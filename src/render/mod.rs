// src/render/mod.rs

//! Render adapter: graph + layout → [`Scene`].
//!
//! - [`label`] builds hover text from node attributes.
//! - [`color`] normalizes semesters onto a `[0, 1]` gradient.
//! - [`scene`] defines the Plotly-shaped output types.
//! - [`adapter`] ties them together.
//!
//! Nothing in here draws or performs I/O.

pub mod adapter;
pub mod color;
pub mod label;
pub mod scene;

pub use adapter::{render, render_with};
pub use color::{calculate_color_range, UNIFORM_COLOR};
pub use label::{capitalize, generate_label, LABEL_SEPARATOR};
pub use scene::{EdgeTrace, Figure, NodeTrace, Scene};

use crate::config::model::RenderSection;

/// Styling and hover configuration for [`render_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Display names shown in the hover text, in order.
    pub label_columns: Vec<String>,
    pub title: String,
    /// Footnote placed at the bottom-left corner of the figure.
    pub annotation: Option<String>,
    pub colorscale: String,
    pub node_size: u32,
    pub edge_width: f64,
    pub edge_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&RenderSection::default())
    }
}

impl RenderOptions {
    pub fn from_config(cfg: &RenderSection) -> Self {
        Self {
            label_columns: cfg.label_columns.clone(),
            title: cfg.title.clone(),
            annotation: cfg.annotation.clone(),
            colorscale: cfg.colorscale.clone(),
            node_size: cfg.node_size,
            edge_width: cfg.edge_width,
            edge_color: cfg.edge_color.clone(),
        }
    }
}
