//! FileSystem port - abstraction over file I/O operations
//!
//! The payload builder reads the source, writes and removes temporary
//! artifacts, and reads back the archive through this trait.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Something already sits at a path that had to be created
    AlreadyExists(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::AlreadyExists(path) => write!(f, "Already exists: {}", path.display()),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Check that the path names an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read the whole file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Create a new file and write `content` to it
    ///
    /// Fails with `AlreadyExists` rather than truncating an existing file.
    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if anything exists at the path
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write_new(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }
}
