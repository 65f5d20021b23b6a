//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_writer;
pub mod clock;
pub mod file_system;
pub mod temp_dir;

pub use archive_writer::{ArchiveError, ArchiveResult, ArchiveWriter};
pub use clock::Clock;
pub use file_system::{FileSystem, FsError, FsResult};
pub use temp_dir::{normalize_temp_dir, TempDirProvider};
