use prelimine::graph::build_graph;
use prelimine::layout::{compute_layout, Position};
use prelimine::render::{
    calculate_color_range, capitalize, generate_label, render, render_with, RenderOptions,
    UNIFORM_COLOR,
};
use prelimine_test_utils::approx_eq;
use prelimine_test_utils::builders::{sample_catalog, ConfigFileBuilder, RecordBuilder};

const LABEL_COLUMNS: [&str; 3] = ["Course Name", "Semester", "Professor"];

#[test]
fn hover_label_matches_display_format() {
    let graph = build_graph(&sample_catalog());
    let alg = graph.course("ALG").unwrap();

    let label = generate_label(alg, &LABEL_COLUMNS);

    assert_eq!(
        label,
        "Course name: Algorithms<br>Semester: 3<br>Professor: Dr. Williams"
    );
}

#[test]
fn hover_label_renders_missing_attribute_as_empty() {
    let records = vec![RecordBuilder::new("X").semester(2).build()];
    let graph = build_graph(&records);

    let label = generate_label(graph.course("X").unwrap(), &["Course Name", "Room Number"]);

    assert_eq!(label, "Course name: <br>Room number: ");
}

#[test]
fn hover_label_shows_defaulted_semester_and_lists() {
    let records = vec![
        RecordBuilder::new("ITP").semester(1).build(),
        RecordBuilder::new("ORI").after("ITP").build(),
    ];
    let graph = build_graph(&records);

    let label = generate_label(graph.course("ORI").unwrap(), &["Semester", "Preliminary"]);

    assert_eq!(label, "Semester: 0<br>Preliminary: ['ITP']");
}

#[test]
fn hover_label_with_no_columns_is_empty() {
    let graph = build_graph(&sample_catalog());
    let no_columns: [&str; 0] = [];

    assert_eq!(generate_label(graph.course("ITP").unwrap(), &no_columns), "");
}

#[test]
fn capitalize_lowers_everything_after_first_char() {
    assert_eq!(capitalize("Course Name"), "Course name");
    assert_eq!(capitalize("sEMESTER"), "Semester");
    assert_eq!(capitalize(""), "");
}

#[test]
fn colors_are_linear_between_first_and_last_semester() {
    let colors = calculate_color_range(&[1u32, 2, 3, 3, 3, 4]);

    let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0];
    assert_eq!(colors.len(), expected.len());
    for (got, want) in colors.iter().zip(expected) {
        assert!(approx_eq(*got, want), "got {got}, want {want}");
    }
}

#[test]
fn single_semester_gets_uniform_color() {
    let colors = calculate_color_range(&[3u32, 3, 3]);

    assert_eq!(colors, vec![UNIFORM_COLOR; 3]);
    assert_eq!(UNIFORM_COLOR, 0.5);
}

#[test]
fn colors_keep_input_order() {
    let colors = calculate_color_range(&[4.0f64, 0.0, 2.0]);

    assert_eq!(colors, vec![1.0, 0.0, 0.5]);
}

#[test]
fn no_semesters_no_colors() {
    let empty: [u32; 0] = [];
    assert!(calculate_color_range(&empty).is_empty());
}

#[test]
fn edges_are_separate_segments() {
    let graph = build_graph(&sample_catalog());
    let layout = compute_layout(&graph);

    let scene = render(&graph, &layout, &LABEL_COLUMNS);

    assert_eq!(scene.edges.len(), graph.edge_count());
    assert_eq!(scene.edges.x.len(), 3 * graph.edge_count());
    for chunk in scene.edges.x.chunks(3).chain(scene.edges.y.chunks(3)) {
        assert!(chunk[0].is_some());
        assert!(chunk[1].is_some());
        assert!(chunk[2].is_none());
    }

    let segments = scene.edges.segments();
    assert_eq!(segments.len(), graph.edge_count());
    // First edge is ITP -> DST.
    assert_eq!(
        segments[0],
        (Position::new(0.5, -1.0), Position::new(0.5, -2.0))
    );
}

#[test]
fn node_vectors_are_aligned_in_graph_order() {
    let graph = build_graph(&sample_catalog());
    let layout = compute_layout(&graph);

    let scene = render(&graph, &layout, &LABEL_COLUMNS);
    let nodes = &scene.nodes;

    assert_eq!(nodes.text, vec!["ITP", "DST", "ALG", "OPS", "DBS", "SWE"]);
    assert_eq!(nodes.len(), 6);
    assert_eq!(nodes.y.len(), 6);
    assert_eq!(nodes.hovertext.len(), 6);
    assert_eq!(nodes.marker.color.len(), 6);

    for (i, course) in graph.courses().enumerate() {
        let pos = layout.position(course.shorthand()).unwrap();
        assert_eq!(nodes.x[i], pos.x);
        assert_eq!(nodes.y[i], pos.y);
    }

    assert_eq!(nodes.marker.color[0], 0.0);
    assert_eq!(nodes.marker.color[5], 1.0);
    assert_eq!(
        nodes.hovertext[2],
        "Course name: Algorithms<br>Semester: 3<br>Professor: Dr. Williams"
    );
}

#[test]
fn figure_json_has_plotly_shape() {
    let graph = build_graph(&sample_catalog());
    let layout = compute_layout(&graph);
    let cfg = ConfigFileBuilder::new()
        .title("Course Map")
        .annotation("Business Analytics 2024/2025")
        .build();

    let scene = render_with(&graph, &layout, &RenderOptions::from_config(&cfg.render));
    let json: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();

    let edges = &json["data"][0];
    assert_eq!(edges["mode"], "lines");
    assert_eq!(edges["hoverinfo"], "none");
    assert!(edges["x"][2].is_null());
    assert_eq!(edges["line"]["color"], "#888");

    let nodes = &json["data"][1];
    assert_eq!(nodes["mode"], "markers+text");
    assert_eq!(nodes["textposition"], "middle center");
    assert_eq!(nodes["marker"]["colorscale"], "Bluered");
    assert_eq!(nodes["marker"]["size"], 50);
    assert_eq!(nodes["marker"]["cmax"], 1.0);
    assert_eq!(nodes["text"][0], "ITP");

    let fig_layout = &json["layout"];
    assert_eq!(fig_layout["title"]["text"], "Course Map");
    assert_eq!(fig_layout["showlegend"], false);
    assert_eq!(fig_layout["margin"]["t"], 50);
    assert_eq!(fig_layout["annotations"][0]["text"], "Business Analytics 2024/2025");
    assert_eq!(fig_layout["annotations"][0]["xref"], "paper");
    assert_eq!(fig_layout["xaxis"]["showticklabels"], false);
}

#[test]
fn figure_omits_annotations_when_unset() {
    let graph = build_graph(&sample_catalog());
    let layout = compute_layout(&graph);

    let scene = render_with(&graph, &layout, &RenderOptions::default());
    let json: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();

    assert!(json["layout"].get("annotations").is_none());
    assert_eq!(
        json["layout"]["title"]["text"],
        "Hierarchical Course Dependencies by Semester"
    );
}

#[test]
fn single_semester_graph_renders_uniform_colors() {
    let records = vec![
        RecordBuilder::new("A").semester(2).build(),
        RecordBuilder::new("B").semester(2).build(),
    ];
    let graph = build_graph(&records);
    let layout = compute_layout(&graph);

    let scene = render(&graph, &layout, &LABEL_COLUMNS);

    assert_eq!(scene.nodes.marker.color, vec![0.5, 0.5]);
    assert!(scene.edges.is_empty());
}

#[test]
fn capitalize_uses_title_case_for_digraphs() {
    assert_eq!(capitalize("ǆemal"), "ǅemal");
    assert_eq!(capitalize("ǄEMAL"), "ǅemal");
    assert_eq!(capitalize("ǉubljana"), "ǈubljana");
}

#[test]
fn hover_label_shows_booleans_like_python() {
    let records = vec![
        RecordBuilder::new("X")
            .semester(1)
            .field("elective", prelimine::course::AttrValue::Bool(true))
            .field("online", prelimine::course::AttrValue::Bool(false))
            .build(),
    ];
    let graph = build_graph(&records);

    let label = generate_label(graph.course("X").unwrap(), &["Elective", "Online"]);

    assert_eq!(label, "Elective: True<br>Online: False");
}
