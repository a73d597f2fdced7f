// tests/config_loading.rs

use std::io::Write;

use prelimine::config::{load_and_validate, load_or_default};
use prelimine::errors::PrelimineError;
use prelimine::types::Strictness;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_loaded() {
    let file = config_file(
        r##"
[config]
strictness = "warn"

[input]
path = "courses.csv"
prerequisite_column = "requires"
term_column = "term"

[input.term_codes]
Pre = 0
Fall = 1
Spring = 2

[render]
label_columns = ["Course Name", "Professor"]
title = "Course Map"
annotation = "Business Analytics 2024/2025"
colorscale = "Viridis"
node_size = 40
edge_width = 1.5
edge_color = "#333"
"##,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.config.strictness, Strictness::Warn);
    assert_eq!(cfg.input.path.as_deref(), Some("courses.csv"));
    assert_eq!(cfg.input.prerequisite_column, "requires");
    assert_eq!(cfg.input.term_column, "term");
    assert_eq!(cfg.input.term_codes.len(), 3);
    assert_eq!(cfg.input.term_codes.get("Spring"), Some(&2));
    assert_eq!(cfg.render.label_columns, vec!["Course Name", "Professor"]);
    assert_eq!(cfg.render.title, "Course Map");
    assert_eq!(cfg.render.annotation.as_deref(), Some("Business Analytics 2024/2025"));
    assert_eq!(cfg.render.colorscale, "Viridis");
    assert_eq!(cfg.render.node_size, 40);
    assert_eq!(cfg.render.edge_width, 1.5);
    assert_eq!(cfg.render.edge_color, "#333");
}

#[test]
fn empty_config_uses_defaults() {
    let file = config_file("");

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.config.strictness, Strictness::Lenient);
    assert_eq!(cfg.input.path, None);
    assert_eq!(cfg.input.prerequisite_column, "preliminary");
    assert_eq!(cfg.input.term_column, "term_part_str");
    assert_eq!(cfg.input.term_codes.get("W2"), Some(&4));
    assert_eq!(
        cfg.render.label_columns,
        vec!["Course Name", "Semester", "Professor"]
    );
    assert_eq!(cfg.render.colorscale, "Bluered");
    assert_eq!(cfg.render.node_size, 50);
    assert_eq!(cfg.render.annotation, None);
}

#[test]
fn zero_node_size_returns_config_error() {
    let file = config_file("[render]\nnode_size = 0\n");

    match load_and_validate(file.path()) {
        Err(PrelimineError::ConfigError(msg)) => assert!(msg.contains("node_size")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn negative_edge_width_returns_config_error() {
    let file = config_file("[render]\nedge_width = -2.0\n");

    match load_and_validate(file.path()) {
        Err(PrelimineError::ConfigError(msg)) => assert!(msg.contains("edge_width")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn empty_term_codes_return_config_error() {
    let file = config_file("[input.term_codes]\n");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(PrelimineError::ConfigError(_))
    ));
}

#[test]
fn unknown_strictness_is_a_toml_error() {
    let file = config_file("[config]\nstrictness = \"paranoid\"\n");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(PrelimineError::TomlError(_))
    ));
}

#[test]
fn missing_default_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Prelimine.toml");

    let cfg = load_or_default(&path, false).unwrap();

    assert_eq!(cfg.render.title, "Hierarchical Course Dependencies by Semester");
}

#[test]
fn missing_explicit_config_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Missing.toml");

    assert!(matches!(
        load_or_default(&path, true),
        Err(PrelimineError::IoError(_))
    ));
}

#[test]
fn strictness_parses_from_cli_text() {
    assert_eq!("Strict".parse::<Strictness>(), Ok(Strictness::Strict));
    assert_eq!(" warn ".parse::<Strictness>(), Ok(Strictness::Warn));
    assert!("loud".parse::<Strictness>().is_err());
}
