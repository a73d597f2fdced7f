// src/watch/mod.rs

//! Watch mode support.
//!
//! - [`hash`] fingerprints record sets with blake3 so unchanged input is not
//!   re-rendered.
//! - [`watcher`] wires up a cross-platform filesystem watcher (`notify`) for
//!   the input and config files.

pub mod hash;
pub mod watcher;

pub use hash::{fingerprint, RenderCache};
pub use watcher::{spawn_watcher, WatcherHandle};
