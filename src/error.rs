//! Error types for upload-payload
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ArchiveError, FsError};

/// Result type alias for payload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// The step of payload building that touched the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    ReadSource,
    CreateArchive,
    WriteTempFile,
    AddEntry,
    CloseArchive,
}

impl std::fmt::Display for IoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IoAction::ReadSource => "unable to read source file",
            IoAction::CreateArchive => "unable to create zip archive",
            IoAction::WriteTempFile => "unable to create temporary file for transfer",
            IoAction::AddEntry => "unable to add entry to zip archive",
            IoAction::CloseArchive => "unable to finalize zip archive",
        };
        f.write_str(text)
    }
}

/// Underlying cause of an I/O failure
#[derive(Error, Debug)]
pub enum IoCause {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Main error type for payload operations
#[derive(Error, Debug)]
pub enum UploadError {
    /// Source path does not name an existing regular file
    #[error("no such file: {}", .path.display())]
    InvalidArgument { path: PathBuf },

    /// A filesystem or archive step failed
    #[error("{action}: {}", .path.display())]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        source: IoCause,
    },

    /// The generated archive could not be read back
    #[error("unable to read generated zip file: {}", .path.display())]
    UnreadableArchive {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl UploadError {
    pub(crate) fn io(
        action: IoAction,
        path: impl Into<PathBuf>,
        source: impl Into<IoCause>,
    ) -> Self {
        UploadError::Io {
            action,
            path: path.into(),
            source: source.into(),
        }
    }

    /// Path the failure refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            UploadError::InvalidArgument { path }
            | UploadError::Io { path, .. }
            | UploadError::UnreadableArchive { path, .. }
            | UploadError::Config { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = UploadError::InvalidArgument {
            path: PathBuf::from("/no/such/file"),
        };
        assert_eq!(err.to_string(), "no such file: /no/such/file");
    }

    #[test]
    fn test_error_display_io_names_action_and_path() {
        let err = UploadError::io(
            IoAction::CreateArchive,
            "/tmp/abc.zip",
            FsError::AlreadyExists(PathBuf::from("/tmp/abc.zip")),
        );
        assert_eq!(err.to_string(), "unable to create zip archive: /tmp/abc.zip");
        assert_eq!(err.path(), std::path::Path::new("/tmp/abc.zip"));
    }

    #[test]
    fn test_error_display_unreadable_archive() {
        let err = UploadError::UnreadableArchive {
            path: PathBuf::from("/tmp/abc.zip"),
            source: FsError::NotFound(PathBuf::from("/tmp/abc.zip")),
        };
        assert_eq!(
            err.to_string(),
            "unable to read generated zip file: /tmp/abc.zip"
        );
    }
}
