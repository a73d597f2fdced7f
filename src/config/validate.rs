// src/config/validate.rs

use crate::config::model::{ConfigFile, InputSection, RawConfigFile, RenderSection};
use crate::errors::{PrelimineError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PrelimineError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.input, raw.render))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_input(&cfg.input)?;
    validate_render(&cfg.render)?;
    Ok(())
}

fn validate_input(input: &InputSection) -> Result<()> {
    if input.prerequisite_column.trim().is_empty() {
        return Err(PrelimineError::ConfigError(
            "[input].prerequisite_column must not be empty".to_string(),
        ));
    }

    if input.term_codes.is_empty() {
        return Err(PrelimineError::ConfigError(
            "[input.term_codes] must map at least one term code".to_string(),
        ));
    }

    if let Some(code) = input.term_codes.keys().find(|c| c.trim().is_empty()) {
        return Err(PrelimineError::ConfigError(format!(
            "[input.term_codes] contains a blank term code ({code:?})"
        )));
    }

    Ok(())
}

fn validate_render(render: &RenderSection) -> Result<()> {
    if render.node_size == 0 {
        return Err(PrelimineError::ConfigError(
            "[render].node_size must be >= 1 (got 0)".to_string(),
        ));
    }

    if !(render.edge_width.is_finite() && render.edge_width > 0.0) {
        return Err(PrelimineError::ConfigError(format!(
            "[render].edge_width must be a positive number (got {})",
            render.edge_width
        )));
    }

    if render.colorscale.trim().is_empty() {
        return Err(PrelimineError::ConfigError(
            "[render].colorscale must not be empty".to_string(),
        ));
    }

    Ok(())
}
