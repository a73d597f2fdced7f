// src/watch/hash.rs

use blake3::Hasher;
use tracing::debug;

use crate::course::CourseRecord;
use crate::errors::Result;

/// Content hash of a record set.
///
/// Records are hashed through their canonical JSON form (attribute maps are
/// ordered), in input order, since input order changes which edges exist.
pub fn fingerprint(records: &[CourseRecord]) -> Result<String> {
    let mut hasher = Hasher::new();
    for record in records {
        let bytes = serde_json::to_vec(record)?;
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }
    let hash = hasher.finalize().to_hex().to_string();
    debug!(hash = %hash, records = records.len(), "computed record fingerprint");
    Ok(hash)
}

/// Remembers the fingerprint of the last rendered record set.
///
/// The cache is keyed on nothing but the fingerprint; anything else that
/// affects the output (configuration) must call [`RenderCache::invalidate`].
#[derive(Debug, Default)]
pub struct RenderCache {
    last: Option<String>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `fingerprint` and report whether it differs from the previous
    /// one (always true after construction or invalidation).
    pub fn update(&mut self, fingerprint: &str) -> bool {
        if self.last.as_deref() == Some(fingerprint) {
            return false;
        }
        self.last = Some(fingerprint.to_string());
        true
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
