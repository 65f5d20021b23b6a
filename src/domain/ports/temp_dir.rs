//! TempDirProvider port - where temporary artifacts are created
//!
//! Directory conventions differ across platforms (some report a trailing
//! separator, some don't), so every provider hands out a normalized path
//! ending in exactly one separator.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Supplies the directory for temporary artifacts
pub trait TempDirProvider {
    /// Temp directory, ending in exactly one separator
    fn temp_dir(&self) -> PathBuf;
}

impl<T: TempDirProvider + ?Sized> TempDirProvider for &T {
    fn temp_dir(&self) -> PathBuf {
        (**self).temp_dir()
    }
}

/// Trim every trailing separator and append exactly one.
///
/// Works on the path's components, so non-UTF-8 directory names pass
/// through untouched; repeated separators inside the path collapse too.
/// Idempotent: normalizing a normalized path returns it unchanged.
pub fn normalize_temp_dir(path: &Path) -> PathBuf {
    let trimmed: PathBuf = path.components().collect();
    let is_root = matches!(trimmed.components().next_back(), Some(Component::RootDir));

    let mut normalized = trimmed.into_os_string();
    if !is_root {
        normalized.push(MAIN_SEPARATOR_STR);
    }
    PathBuf::from(normalized)
}
