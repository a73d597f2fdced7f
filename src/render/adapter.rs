// src/render/adapter.rs

use tracing::debug;

use crate::graph::CourseGraph;
use crate::layout::Layout;
use crate::render::color::calculate_color_range;
use crate::render::label::generate_label;
use crate::render::scene::{
    Annotation, Axis, EdgeTrace, FigureLayout, LineStyle, Margin, Marker, MarkerLine, NodeTrace,
    Scene, Title,
};
use crate::render::RenderOptions;

/// Render with default styling and the given hover columns.
pub fn render<S: AsRef<str>>(graph: &CourseGraph, layout: &Layout, label_columns: &[S]) -> Scene {
    let options = RenderOptions {
        label_columns: label_columns.iter().map(|c| c.as_ref().to_string()).collect(),
        ..RenderOptions::default()
    };
    render_with(graph, layout, &options)
}

/// Map a graph and its layout into a [`Scene`].
///
/// `layout` is expected to come from [`crate::layout::compute_layout`] on the
/// same graph. Courses without a position are left out, together with their
/// edges, so the node vectors and colors stay aligned.
pub fn render_with(graph: &CourseGraph, layout: &Layout, options: &RenderOptions) -> Scene {
    let mut edges = EdgeTrace::new(LineStyle {
        width: options.edge_width,
        color: options.edge_color.clone(),
    });

    for (from, to) in graph.edges() {
        match (layout.position(from), layout.position(to)) {
            (Some(p0), Some(p1)) => edges.push_segment(p0, p1),
            _ => debug!(from, to, "edge endpoint has no position; skipping"),
        }
    }

    let placed: Vec<_> = graph
        .courses()
        .filter_map(|course| layout.position(course.shorthand()).map(|pos| (course, pos)))
        .collect();

    let semesters: Vec<u32> = placed.iter().map(|(course, _)| course.semester()).collect();
    let colors = calculate_color_range(&semesters);

    let mut nodes = NodeTrace::new(Marker {
        colorscale: options.colorscale.clone(),
        cmin: 0.0,
        cmax: 1.0,
        color: colors,
        size: options.node_size,
        line: MarkerLine { width: 2.0 },
    });

    for (course, pos) in &placed {
        nodes.x.push(pos.x);
        nodes.y.push(pos.y);
        nodes.text.push(course.shorthand().to_string());
        nodes
            .hovertext
            .push(generate_label(course, options.label_columns.as_slice()));
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "rendered scene"
    );

    Scene {
        edges,
        nodes,
        layout: figure_layout(options),
    }
}

fn figure_layout(options: &RenderOptions) -> FigureLayout {
    let annotations = options
        .annotation
        .iter()
        .map(|text| Annotation {
            text: text.clone(),
            showarrow: false,
            xref: "paper",
            yref: "paper",
            x: 0.005,
            y: -0.002,
        })
        .collect();

    FigureLayout {
        title: Title {
            text: options.title.clone(),
        },
        showlegend: false,
        hovermode: "closest",
        margin: Margin {
            b: 0,
            l: 0,
            r: 0,
            t: 50,
        },
        annotations,
        xaxis: Axis::hidden(),
        yaxis: Axis::hidden(),
    }
}
