use prelimine::course::CourseRecord;
use prelimine::graph::build_graph;
use prelimine::layout::{compute_layout, group_by_semester, Position};
use prelimine_test_utils::approx_eq;
use prelimine_test_utils::builders::{sample_catalog, RecordBuilder};

#[test]
fn single_course_rows_are_centered() {
    let records = vec![
        RecordBuilder::new("ITP").semester(1).build(),
        RecordBuilder::new("DST").after("ITP").semester(2).build(),
    ];
    let graph = build_graph(&records);

    let layout = compute_layout(&graph);

    assert_eq!(layout.len(), 2);
    assert_eq!(layout.position("ITP"), Some(Position::new(0.5, -1.0)));
    assert_eq!(layout.position("DST"), Some(Position::new(0.5, -2.0)));
}

#[test]
fn row_of_three_is_evenly_spaced_in_graph_order() {
    let graph = build_graph(&sample_catalog());

    let layout = compute_layout(&graph);

    let alg = layout.position("ALG").unwrap();
    let ops = layout.position("OPS").unwrap();
    let dbs = layout.position("DBS").unwrap();
    assert!(approx_eq(alg.x, 0.25));
    assert!(approx_eq(ops.x, 0.5));
    assert!(approx_eq(dbs.x, 0.75));
    for pos in [alg, ops, dbs] {
        assert_eq!(pos.y, -3.0);
    }
}

#[test]
fn y_is_negated_semester() {
    let graph = build_graph(&sample_catalog());
    let layout = compute_layout(&graph);

    for course in graph.courses() {
        let pos = layout.position(course.shorthand()).unwrap();
        assert_eq!(pos.y, -f64::from(course.semester()));
        assert!(pos.x > 0.0 && pos.x < 1.0, "{} x={}", course.shorthand(), pos.x);
    }
}

#[test]
fn missing_semester_sits_on_top_row() {
    let records = vec![
        RecordBuilder::new("ORI").build(),
        RecordBuilder::new("ITP").semester(1).build(),
    ];
    let graph = build_graph(&records);

    let layout = compute_layout(&graph);

    let ori = layout.position("ORI").unwrap();
    assert_eq!(ori.y, 0.0);
    assert!(ori.y > layout.position("ITP").unwrap().y);
}

#[test]
fn rows_follow_first_appearance_not_numeric_order() {
    let records = vec![
        RecordBuilder::new("LATE").semester(5).build(),
        RecordBuilder::new("EARLY").semester(1).build(),
        RecordBuilder::new("LATE2").semester(5).build(),
    ];
    let graph = build_graph(&records);

    let rows = group_by_semester(&graph);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].semester, 5);
    assert_eq!(rows[0].courses, vec!["LATE", "LATE2"]);
    assert_eq!(rows[1].semester, 1);
    assert_eq!(rows[1].courses, vec!["EARLY"]);

    let layout = compute_layout(&graph);
    assert_eq!(layout.rows(), rows.as_slice());
    assert!(approx_eq(layout.position("LATE").unwrap().x, 1.0 / 3.0));
    assert!(approx_eq(layout.position("LATE2").unwrap().x, 2.0 / 3.0));
}

#[test]
fn within_row_order_is_insertion_not_alphabetical() {
    let records = vec![
        RecordBuilder::new("ZZZ").semester(1).build(),
        RecordBuilder::new("AAA").semester(1).build(),
    ];
    let graph = build_graph(&records);

    let layout = compute_layout(&graph);

    assert!(layout.position("ZZZ").unwrap().x < layout.position("AAA").unwrap().x);
}

#[test]
fn empty_graph_has_empty_layout() {
    let records: Vec<CourseRecord> = Vec::new();
    let graph = build_graph(&records);

    let layout = compute_layout(&graph);

    assert!(layout.is_empty());
    assert!(layout.rows().is_empty());
}
