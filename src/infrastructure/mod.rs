//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and temp directory providers
//! - `archive/` - Zip archive writer
//! - `clock` - System and fixed clocks

pub mod archive;
pub mod clock;
pub mod fs;

// Re-export for convenience
pub use archive::ZipArchiveWriter;
pub use clock::{FixedClock, SystemClock};
pub use fs::{FixedTempDir, LocalFs, SystemTempDir};
