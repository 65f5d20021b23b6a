//! upload-payload - file upload payloads for remote browser sessions
//!
//! A remote-control client places a local file on the browser host by
//! POSTing `{"file": "<payload>"}` to the session's `file` endpoint. The
//! payload is the base64 text of a zip archive whose only entry is the file.
//! This crate builds that payload and cleans up every temporary artifact it
//! creates along the way.
//!
//! ```no_run
//! use upload_payload::{FileCommand, PayloadBuilder};
//!
//! # fn example() -> upload_payload::UploadResult<()> {
//! let payload = PayloadBuilder::local().build_payload("/tmp/in.txt")?;
//! println!("{}", payload);
//!
//! let command = FileCommand::new("/tmp/in.txt")?;
//! assert_eq!(command.http_method().as_str(), "POST");
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{FileCommand, FileCommandBody, HttpMethod, PayloadBuilder};
pub use config::Config;
pub use domain::ports::{ArchiveWriter, Clock, FileSystem, TempDirProvider};
pub use domain::value_objects::{ArtifactName, Compression, Payload};
pub use error::{IoAction, UploadError, UploadResult};
pub use infrastructure::{
    FixedClock, FixedTempDir, LocalFs, SystemClock, SystemTempDir, ZipArchiveWriter,
};
