// src/render/scene.rs

//! Scene description handed to the plotting front-end.
//!
//! The types serialize directly into a Plotly figure document:
//!
//! ```json
//! {
//!   "data": [ { "type": "scatter", "mode": "lines", ... },
//!             { "type": "scatter", "mode": "markers+text", ... } ],
//!   "layout": { "title": { "text": "..." }, ... }
//! }
//! ```

use serde::Serialize;

use crate::errors::Result;
use crate::layout::Position;

/// Edge primitives: one line segment per edge.
///
/// Coordinates are stored flat, three entries per segment: start, end, and a
/// `None` sentinel (serialized as `null`) so the front-end does not join
/// consecutive segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub line: LineStyle,
    pub hoverinfo: &'static str,
    pub mode: &'static str,
}

impl EdgeTrace {
    pub fn new(line: LineStyle) -> Self {
        Self {
            kind: "scatter",
            x: Vec::new(),
            y: Vec::new(),
            line,
            hoverinfo: "none",
            mode: "lines",
        }
    }

    pub fn push_segment(&mut self, from: Position, to: Position) {
        self.x.extend([Some(from.x), Some(to.x), None]);
        self.y.extend([Some(from.y), Some(to.y), None]);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.x.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Segments as `(start, end)` pairs, in emission order.
    pub fn segments(&self) -> Vec<(Position, Position)> {
        self.x
            .chunks(3)
            .zip(self.y.chunks(3))
            .filter_map(|(xs, ys)| match (xs, ys) {
                ([Some(x0), Some(x1), None], [Some(y0), Some(y1), None]) => {
                    Some((Position::new(*x0, *y0), Position::new(*x1, *y1)))
                }
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: String,
}

/// Node primitives. All vectors are parallel and in graph order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    /// Visible label (the shorthand).
    pub text: Vec<String>,
    pub hoverinfo: &'static str,
    pub hovertext: Vec<String>,
    pub textposition: &'static str,
    pub marker: Marker,
}

impl NodeTrace {
    pub fn new(marker: Marker) -> Self {
        Self {
            kind: "scatter",
            x: Vec::new(),
            y: Vec::new(),
            mode: "markers+text",
            text: Vec::new(),
            hoverinfo: "text",
            hovertext: Vec::new(),
            textposition: "middle center",
            marker,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub colorscale: String,
    pub cmin: f64,
    pub cmax: f64,
    /// Normalized color per node, parallel to the node vectors.
    pub color: Vec<f64>,
    pub size: u32,
    pub line: MarkerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    pub showlegend: bool,
    pub hovermode: &'static str,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub b: u32,
    pub l: u32,
    pub r: u32,
    pub t: u32,
}

/// Free-floating text placed in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Hidden axis: no grid, zero line or tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    pub zeroline: bool,
    pub showticklabels: bool,
}

impl Axis {
    pub fn hidden() -> Self {
        Self {
            showgrid: false,
            zeroline: false,
            showticklabels: false,
        }
    }
}

/// Complete render output.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub edges: EdgeTrace,
    pub nodes: NodeTrace,
    pub layout: FigureLayout,
}

/// Borrowed Plotly figure view of a [`Scene`].
#[derive(Debug, Serialize)]
pub struct Figure<'a> {
    pub data: (&'a EdgeTrace, &'a NodeTrace),
    pub layout: &'a FigureLayout,
}

impl Scene {
    pub fn figure(&self) -> Figure<'_> {
        Figure {
            data: (&self.edges, &self.nodes),
            layout: &self.layout,
        }
    }

    /// Pretty-printed Plotly figure JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.figure())?)
    }
}
