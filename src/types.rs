use std::str::FromStr;
use serde::Deserialize;

/// How the graph builder treats input that the default pipeline drops
/// silently: prerequisites naming unknown courses, and repeated shorthands.
///
/// - `Lenient`: drop dangling prerequisites, let the last duplicate win, say
///   nothing above debug level (default behaviour).
/// - `Warn`: same outcome as `Lenient`, but every case is logged as a warning.
/// - `Strict`: the first such case aborts the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Lenient,
    Warn,
    Strict,
}

impl Default for Strictness {
    fn default() -> Self {
        Strictness::Lenient
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "warn" => Ok(Strictness::Warn),
            "strict" => Ok(Strictness::Strict),
            other => Err(format!(
                "invalid strictness: {other} (expected \"lenient\", \"warn\" or \"strict\")"
            )),
        }
    }
}

/// Input file flavour, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// A JSON array of record objects.
    Json,
}

impl InputFormat {
    /// Field delimiter for the delimited-text formats.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            InputFormat::Csv => Some(b','),
            InputFormat::Tsv => Some(b'\t'),
            InputFormat::Json => None,
        }
    }
}
