// src/ingest/literal.rs

use anyhow::anyhow;
use regex::Regex;

use crate::errors::Result;

/// Parser for prerequisite list literals as they appear in spreadsheet
/// exports: `[]`, `['ITP']`, `["DST", 'ITP']`, and tuples such as `('ITP',)`.
///
/// Items must be quoted and separated by exactly one comma; a single trailing
/// comma is allowed. A one-item tuple needs its trailing comma, since
/// `('ITP')` is a parenthesized string rather than a tuple.
#[derive(Debug, Clone)]
pub struct PrerequisiteParser {
    item: Regex,
}

impl PrerequisiteParser {
    pub fn new() -> Result<Self> {
        let item = Regex::new(r#"'([^']*)'|"([^"]*)""#)
            .map_err(|e| anyhow!("compiling prerequisite item pattern: {e}"))?;
        Ok(Self { item })
    }

    /// Parse one cell. A blank cell is an empty list. Errors carry a plain
    /// message; the caller attaches the row.
    pub fn parse(&self, cell: &str) -> std::result::Result<Vec<String>, String> {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let (inner, is_tuple) = unwrap_brackets(trimmed).ok_or_else(|| {
            format!("prerequisite list must be bracketed, got {trimmed:?}")
        })?;

        let mut items = Vec::new();
        let mut last_end = 0;
        for caps in self.item.captures_iter(inner) {
            let Some(whole) = caps.get(0) else { continue };
            let gap = Gap::of(&inner[last_end..whole.start()], trimmed)?;
            match (items.is_empty(), gap) {
                (true, Gap::Blank) | (false, Gap::Comma) => {}
                (true, Gap::Comma) => {
                    return Err(format!("unexpected leading ',' in prerequisite list {trimmed:?}"));
                }
                (false, Gap::Blank) => {
                    return Err(format!(
                        "missing ',' between items in prerequisite list {trimmed:?}"
                    ));
                }
            }
            last_end = whole.end();

            let value = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            items.push(value);
        }

        let tail = Gap::of(&inner[last_end..], trimmed)?;
        let item_count = items.len();
        match (item_count, tail) {
            (0, Gap::Comma) => {
                return Err(format!("unexpected ',' in empty prerequisite list {trimmed:?}"));
            }
            (1, Gap::Blank) if is_tuple => {
                return Err(format!(
                    "one-item tuple needs a trailing comma, got {trimmed:?}"
                ));
            }
            _ => {}
        }

        items.retain(|item| !item.is_empty());
        Ok(items)
    }
}

/// Strip `[...]` or `(...)`, reporting whether it was a tuple.
fn unwrap_brackets(literal: &str) -> Option<(&str, bool)> {
    if let Some(inner) = literal.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Some((inner, false));
    }
    literal
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .map(|inner| (inner, true))
}

/// Text between two items (or between a bracket and an item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    Blank,
    Comma,
}

impl Gap {
    fn of(gap: &str, literal: &str) -> std::result::Result<Self, String> {
        let rest = gap.trim();
        match rest {
            "" => Ok(Gap::Blank),
            "," => Ok(Gap::Comma),
            _ => Err(format!(
                "unexpected {rest:?} in prerequisite list {literal:?} (items must be quoted and separated by single commas)"
            )),
        }
    }
}
