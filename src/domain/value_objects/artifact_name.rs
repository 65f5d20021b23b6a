//! Artifact Name Value Object
//!
//! The collision-resistant basename shared by the temporary copy of the
//! source file and the zip archive built from it.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Hex digest of (timestamp, source path)
///
/// Not a security boundary. It only has to keep concurrent and sequential
/// calls from picking the same temp names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Derive the name from a timestamp and the source path
    pub fn derive(now: DateTime<Utc>, source: &Path) -> Self {
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros());
        let mut hasher = Sha256::new();
        hasher.update(nanos.to_string().as_bytes());
        hasher.update(source.to_string_lossy().as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the plain temp copy, keeping the source extension
    pub fn temp_file_name(&self, source: &Path) -> String {
        match source.extension() {
            Some(ext) if !ext.is_empty() => format!("{}.{}", self.0, ext.to_string_lossy()),
            _ => self.0.clone(),
        }
    }

    /// File name of the zip archive
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.0)
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtifactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
