// src/lib.rs

pub mod cli;
pub mod config;
pub mod course;
pub mod errors;
pub mod graph;
pub mod ingest;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod watch;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_or_default};
use crate::errors::PrelimineError;
use crate::graph::{CourseGraph, GraphBuilder};
use crate::ingest::load_records;
use crate::layout::group_by_semester;
use crate::pipeline::Pipeline;
use crate::render::Scene;
use crate::watch::spawn_watcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - record ingestion
/// - graph build / layout / render
/// - output writing
/// - (optional) file watcher and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let (config_path, config_required) = match &args.config {
        Some(path) => (PathBuf::from(path), true),
        None => (default_config_path(), false),
    };
    let cfg = load_or_default(&config_path, config_required)?;
    let input_path = resolve_input(&args, cfg.input.path.as_deref())?;
    let output = args.output.as_ref().map(PathBuf::from);

    let mut pipeline = Pipeline::new(cfg, args.strictness);
    let records = load_records(&input_path, &pipeline.config().input)?;

    if args.dry_run {
        let graph = GraphBuilder::new(pipeline.strictness()).build(&records)?;
        print_dry_run(&graph);
        return Ok(());
    }

    if let Some(scene) = pipeline.scene_if_changed(&records)? {
        write_scene(&scene, output.as_deref())?;
    }

    if !args.watch {
        return Ok(());
    }

    let mut watched = vec![input_path.clone()];
    if config_path.exists() {
        watched.push(config_path.clone());
    }
    let config_abs = config_path.canonicalize().ok();

    let (changed_tx, mut changed_rx) = mpsc::unbounded_channel::<PathBuf>();
    let _watcher = spawn_watcher(&watched, changed_tx)?;

    loop {
        tokio::select! {
            changed = changed_rx.recv() => {
                let Some(first) = changed else {
                    info!("file watcher channel closed; exiting");
                    break;
                };

                // Editors tend to emit a burst of events per save.
                let mut paths = vec![first];
                while let Ok(more) = changed_rx.try_recv() {
                    paths.push(more);
                }
                debug!(?paths, "watched files changed");
                let config_changed = config_abs
                    .as_ref()
                    .is_some_and(|cfg_path| paths.contains(cfg_path));

                if let Err(err) = refresh(
                    &mut pipeline,
                    config_changed.then_some(config_path.as_path()),
                    &input_path,
                    output.as_deref(),
                ) {
                    warn!(error = %err, "re-render failed; keeping previous output");
                }
            }
            res = tokio::signal::ctrl_c() => {
                if let Err(e) = res {
                    eprintln!("failed to listen for Ctrl+C: {e}");
                }
                info!("shutdown requested");
                break;
            }
        }
    }

    Ok(())
}

/// `--input` wins over `[input].path`.
fn resolve_input(args: &CliArgs, configured: Option<&str>) -> Result<PathBuf> {
    args.input
        .as_deref()
        .or(configured)
        .map(PathBuf::from)
        .ok_or_else(|| {
            PrelimineError::ConfigError(
                "no input file: pass --input or set [input].path".to_string(),
            )
            .into()
        })
}

/// Reload after a change. `config` is set when the config file itself
/// changed.
fn refresh(
    pipeline: &mut Pipeline,
    config: Option<&Path>,
    input_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    if let Some(path) = config {
        let cfg = load_or_default(path, true)?;
        pipeline.reconfigure(cfg);
    }

    let records = load_records(input_path, &pipeline.config().input)?;
    match pipeline.scene_if_changed(&records)? {
        Some(scene) => {
            write_scene(&scene, output)?;
            info!("scene re-rendered");
        }
        None => debug!("no effective change"),
    }
    Ok(())
}

/// Write the figure JSON to `output`, or stdout when `None`.
pub fn write_scene(scene: &Scene, output: Option<&Path>) -> Result<()> {
    let json = scene.to_json()?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            info!(?path, "wrote figure");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Simple dry-run output: print semester rows and edges.
fn print_dry_run(graph: &CourseGraph) {
    println!("prelimine dry-run");
    println!("  courses = {}", graph.node_count());
    println!("  prerequisite edges = {}", graph.edge_count());
    println!();

    println!("semesters:");
    for row in group_by_semester(graph) {
        println!("  - {}: {}", row.semester, row.courses.join(", "));
    }

    if graph.edge_count() > 0 {
        println!();
        println!("edges:");
        for (from, to) in graph.edges() {
            println!("  {from} -> {to}");
        }
    }

    debug!("dry-run complete (no rendering)");
}
