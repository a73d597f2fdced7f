// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::Strictness;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// strictness = "warn"
///
/// [input]
/// path = "data.csv"
/// prerequisite_column = "preliminary"
/// term_column = "term_part_str"
///
/// [input.term_codes]
/// Pre = 0
/// F1 = 1
///
/// [render]
/// label_columns = ["Course Name", "Semester", "Professor"]
/// title = "Hierarchical Course Dependencies by Semester"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub render: RenderSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub input: InputSection,
    pub render: RenderSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        input: InputSection,
        render: RenderSection,
    ) -> Self {
        Self {
            config,
            input,
            render,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let raw = RawConfigFile::default();
        Self::new_unchecked(raw.config, raw.input, raw.render)
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"lenient"` (default), `"warn"` or `"strict"`.
    #[serde(default)]
    pub strictness: Strictness,
}

/// `[input]` section: where records come from and how table columns map onto
/// record fields.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
    /// Default input file when `--input` is not given.
    #[serde(default)]
    pub path: Option<String>,

    /// Column holding the prerequisite list literal, e.g. `['ITP', 'DST']`.
    #[serde(default = "default_prerequisite_column")]
    pub prerequisite_column: String,

    /// Column holding term codes (`Pre`, `F1`, ...) to translate into
    /// semesters. When the column is absent, a `semester` column is used.
    #[serde(default = "default_term_column")]
    pub term_column: String,

    /// Term code → semester rank.
    #[serde(default = "default_term_codes")]
    pub term_codes: BTreeMap<String, u32>,
}

fn default_prerequisite_column() -> String {
    "preliminary".to_string()
}

fn default_term_column() -> String {
    "term_part_str".to_string()
}

/// `Pre` → 0, `F1` → 1, `F2` → 2, `W1` → 3, `W2` → 4, `S` → 5.
pub fn default_term_codes() -> BTreeMap<String, u32> {
    [("Pre", 0), ("F1", 1), ("F2", 2), ("W1", 3), ("W2", 4), ("S", 5)]
        .into_iter()
        .map(|(code, rank)| (code.to_string(), rank))
        .collect()
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            path: None,
            prerequisite_column: default_prerequisite_column(),
            term_column: default_term_column(),
            term_codes: default_term_codes(),
        }
    }
}

/// `[render]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSection {
    /// Display names shown in hover text, in order. Each is looked up as
    /// `lowercase_with_underscores`.
    #[serde(default = "default_label_columns")]
    pub label_columns: Vec<String>,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub annotation: Option<String>,

    /// Plotly colorscale name applied to the semester gradient.
    #[serde(default = "default_colorscale")]
    pub colorscale: String,

    #[serde(default = "default_node_size")]
    pub node_size: u32,

    #[serde(default = "default_edge_width")]
    pub edge_width: f64,

    #[serde(default = "default_edge_color")]
    pub edge_color: String,
}

fn default_label_columns() -> Vec<String> {
    ["Course Name", "Semester", "Professor"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_title() -> String {
    "Hierarchical Course Dependencies by Semester".to_string()
}

fn default_colorscale() -> String {
    "Bluered".to_string()
}

fn default_node_size() -> u32 {
    50
}

fn default_edge_width() -> f64 {
    2.0
}

fn default_edge_color() -> String {
    "#888".to_string()
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            label_columns: default_label_columns(),
            title: default_title(),
            annotation: None,
            colorscale: default_colorscale(),
            node_size: default_node_size(),
            edge_width: default_edge_width(),
            edge_color: default_edge_color(),
        }
    }
}
