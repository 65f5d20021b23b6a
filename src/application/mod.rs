//! Application Layer
//!
//! Use cases that wire the ports together.
//!
//! - `PayloadBuilder` - file to base64 zip payload
//! - `FileCommand` - the session upload command carrying that payload

pub mod file_command;
pub mod payload_builder;

pub use file_command::{FileCommand, FileCommandBody, HttpMethod};
pub use payload_builder::PayloadBuilder;
