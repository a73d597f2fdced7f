// src/pipeline.rs

//! Builder → layout → render, driven from a [`ConfigFile`].

use tracing::{debug, info};

use crate::config::model::ConfigFile;
use crate::course::CourseRecord;
use crate::errors::Result;
use crate::graph::GraphBuilder;
use crate::layout::compute_layout;
use crate::render::{render_with, RenderOptions, Scene};
use crate::types::Strictness;
use crate::watch::{fingerprint, RenderCache};

/// Holds the active configuration and the render cache used in watch mode.
#[derive(Debug)]
pub struct Pipeline {
    cfg: ConfigFile,
    strictness_override: Option<Strictness>,
    cache: RenderCache,
}

impl Pipeline {
    /// `strictness_override` (from the command line) wins over
    /// `[config].strictness`, including after [`Pipeline::reconfigure`].
    pub fn new(cfg: ConfigFile, strictness_override: Option<Strictness>) -> Self {
        Self {
            cfg,
            strictness_override,
            cache: RenderCache::new(),
        }
    }

    pub fn config(&self) -> &ConfigFile {
        &self.cfg
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness_override
            .unwrap_or(self.cfg.config.strictness)
    }

    /// Swap in a freshly loaded configuration. The next render always runs.
    pub fn reconfigure(&mut self, cfg: ConfigFile) {
        self.cfg = cfg;
        self.cache.invalidate();
        info!(strictness = ?self.strictness(), "configuration reloaded");
    }

    /// Build, lay out and render `records`.
    pub fn scene(&self, records: &[CourseRecord]) -> Result<Scene> {
        let graph = GraphBuilder::new(self.strictness()).build(records)?;
        let layout = compute_layout(&graph);
        let options = RenderOptions::from_config(&self.cfg.render);
        Ok(render_with(&graph, &layout, &options))
    }

    /// Like [`Pipeline::scene`], but returns `None` when `records` hash the
    /// same as the last rendered set.
    pub fn scene_if_changed(&mut self, records: &[CourseRecord]) -> Result<Option<Scene>> {
        let hash = fingerprint(records)?;
        if !self.cache.update(&hash) {
            debug!(hash = %hash, "input unchanged; skipping render");
            return Ok(None);
        }
        match self.scene(records) {
            Ok(scene) => Ok(Some(scene)),
            Err(err) => {
                // Let the same input be retried once the config changes.
                self.cache.invalidate();
                Err(err)
            }
        }
    }
}
