use clap::Parser;
use tracing::level_filters::LevelFilter;

use prelimine::cli::{CliArgs, LogLevel};
use prelimine::logging::build_filter;
use prelimine::types::Strictness;

#[test]
fn cli_defaults() {
    let args = CliArgs::try_parse_from(["prelimine"]).unwrap();

    assert_eq!(args.config, None);
    assert_eq!(args.input, None);
    assert_eq!(args.output, None);
    assert!(!args.watch);
    assert!(!args.dry_run);
    assert_eq!(args.strictness, None);
    assert!(args.log_level.is_none());
}

#[test]
fn cli_accepts_all_flags() {
    let args = CliArgs::try_parse_from([
        "prelimine",
        "--config",
        "demos/Prelimine.toml",
        "-i",
        "courses.csv",
        "-o",
        "out/figure.json",
        "--watch",
        "--strictness",
        "strict",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.config.as_deref(), Some("demos/Prelimine.toml"));
    assert_eq!(args.input.as_deref(), Some("courses.csv"));
    assert_eq!(args.output.as_deref(), Some("out/figure.json"));
    assert!(args.watch);
    assert!(args.dry_run);
    assert_eq!(args.strictness, Some(Strictness::Strict));
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn cli_rejects_unknown_strictness() {
    assert!(CliArgs::try_parse_from(["prelimine", "--strictness", "loud"]).is_err());
}

#[test]
fn log_filter_precedence() {
    let from_cli = build_filter(Some(LogLevel::Trace), Some("error"));
    assert_eq!(from_cli.max_level_hint(), Some(LevelFilter::TRACE));

    let from_env = build_filter(None, Some("prelimine::graph=debug"));
    assert_eq!(from_env.max_level_hint(), Some(LevelFilter::DEBUG));

    let fallback = build_filter(None, None);
    assert_eq!(fallback.max_level_hint(), Some(LevelFilter::INFO));

    let blank = build_filter(None, Some("  "));
    assert_eq!(blank.max_level_hint(), Some(LevelFilter::INFO));
}
