//! Temporary Artifact Guard
//!
//! Owns one file created under the temp directory and removes it when the
//! guard goes out of scope, on success and on every early return.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;

/// Scoped handle to a temporary file
///
/// Only wrap paths this call created: a guard deletes whatever sits at its
/// path when dropped.
#[must_use = "dropping the guard deletes the file immediately"]
pub struct TempArtifact<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    path: PathBuf,
    armed: bool,
}

impl<'a, F: FileSystem + ?Sized> TempArtifact<'a, F> {
    pub fn new(fs: &'a F, path: PathBuf) -> Self {
        Self {
            fs,
            path,
            armed: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now
    pub fn remove(mut self) {
        self.cleanup();
    }

    fn cleanup(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;

        if !self.fs.exists(&self.path) {
            return;
        }
        match self.fs.remove(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed temporary artifact"),
            Err(err) => warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove temporary artifact"
            ),
        }
    }
}

impl<F: FileSystem + ?Sized> Drop for TempArtifact<'_, F> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
