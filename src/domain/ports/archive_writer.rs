//! ArchiveWriter port - creates, populates and closes an archive file
//!
//! One writer handles one archive. Callers construct a fresh writer per
//! payload (or inject one), so no writer state outlives a call.

use std::path::Path;

use thiserror::Error;

/// Result type for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Archive operation errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("archive is not open")]
    NotOpen,

    #[error("archive is already open")]
    AlreadyOpen,

    #[error("cannot derive an entry name from {}", .0.display())]
    InvalidEntryName(std::path::PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Writes files into an archive on disk
pub trait ArchiveWriter {
    /// Open the archive at `path`. With `create` set, a new empty archive is
    /// created; an existing file at `path` is an error.
    fn open(&mut self, path: &Path, create: bool) -> ArchiveResult<()>;

    /// Add the file at `path` as an entry named after its file name
    fn add_file(&mut self, path: &Path) -> ArchiveResult<()>;

    /// Finalize the archive and release the underlying file
    fn close(&mut self) -> ArchiveResult<()>;
}

impl<W: ArchiveWriter + ?Sized> ArchiveWriter for &mut W {
    fn open(&mut self, path: &Path, create: bool) -> ArchiveResult<()> {
        (**self).open(path, create)
    }

    fn add_file(&mut self, path: &Path) -> ArchiveResult<()> {
        (**self).add_file(path)
    }

    fn close(&mut self) -> ArchiveResult<()> {
        (**self).close()
    }
}
