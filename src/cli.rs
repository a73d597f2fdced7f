// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::Strictness;

/// Command-line arguments for `prelimine`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prelimine",
    version,
    about = "Build a course prerequisite graph and render it as a Plotly figure.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Prelimine.toml` in the current working directory, if it
    /// exists. A path given here must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Course table to read (.csv, .tsv or .json).
    ///
    /// Overrides `[input].path` from the config.
    #[arg(long, short, value_name = "PATH")]
    pub input: Option<String>,

    /// Where to write the figure JSON. Defaults to stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<String>,

    /// Keep running and re-render whenever the input or config changes.
    #[arg(long)]
    pub watch: bool,

    /// Handling of dangling prerequisites and duplicate shorthands
    /// (lenient, warn, strict). Overrides `[config].strictness`.
    #[arg(long, value_name = "LEVEL")]
    pub strictness: Option<Strictness>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PRELIMINE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and build the graph, print a summary, but don't render.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
