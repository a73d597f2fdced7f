// src/watch/watcher.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle stops
/// file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the given files and send the path of each one that changes.
///
/// The parent directories are watched rather than the files themselves, so
/// files replaced by editors (write to temp, rename) keep being observed.
pub fn spawn_watcher(
    files: &[PathBuf],
    changed_tx: mpsc::UnboundedSender<PathBuf>,
) -> Result<WatcherHandle> {
    let targets: Vec<PathBuf> = files.iter().map(|f| absolute(f)).collect();
    let dirs: HashSet<PathBuf> = targets
        .iter()
        .filter_map(|f| f.parent().map(Path::to_path_buf))
        .collect();

    let wanted = targets.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if !is_content_event(&event.kind) {
                    return;
                }
                for path in event.paths {
                    let path = absolute(&path);
                    if wanted.contains(&path) {
                        if let Err(err) = changed_tx.send(path) {
                            // Not inside a tracing span here; fall back to stderr.
                            eprintln!("prelimine: failed to forward file change: {err}");
                        }
                    }
                }
            }
            Err(err) => {
                eprintln!("prelimine: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        debug!(?dir, "watching directory");
    }

    info!(files = ?targets, "file watcher started");
    Ok(WatcherHandle { _inner: watcher })
}

fn is_content_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

/// Absolute, canonical path when the file exists; otherwise the path joined
/// onto the current directory.
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}
