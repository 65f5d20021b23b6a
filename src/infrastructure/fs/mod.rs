//! File System Implementations
//!
//! Concrete implementations of the FileSystem and TempDirProvider ports.

mod local;
mod temp_dir;

pub use local::LocalFs;
pub use temp_dir::{FixedTempDir, SystemTempDir};
