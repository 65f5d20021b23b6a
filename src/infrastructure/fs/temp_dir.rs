//! Temp directory providers
//!
//! `SystemTempDir` follows the OS convention (`TMPDIR` on Unix, `GetTempPath`
//! on Windows). `FixedTempDir` pins a directory, for configuration overrides
//! and deterministic tests.

use std::path::PathBuf;

use crate::domain::ports::{normalize_temp_dir, TempDirProvider};

/// Platform temp directory, resolved on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTempDir;

impl TempDirProvider for SystemTempDir {
    fn temp_dir(&self) -> PathBuf {
        normalize_temp_dir(&std::env::temp_dir())
    }
}

/// A directory chosen up front
#[derive(Debug, Clone)]
pub struct FixedTempDir {
    dir: PathBuf,
}

impl FixedTempDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: normalize_temp_dir(&dir.into()),
        }
    }
}

impl TempDirProvider for FixedTempDir {
    fn temp_dir(&self) -> PathBuf {
        self.dir.clone()
    }
}
