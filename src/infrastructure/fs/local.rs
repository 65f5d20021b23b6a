//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| FsError::from_io(e, path))?;

        // The file is ours from here on; don't leave a partial copy behind.
        if let Err(e) = file.write_all(content).and_then(|()| file.flush()) {
            drop(file);
            let _ = std::fs::remove_file(path);
            return Err(FsError::from_io(e, path));
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }
}
