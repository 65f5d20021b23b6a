//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_name;
mod compression;
mod payload;

pub use artifact_name::ArtifactName;
pub use compression::Compression;
pub use payload::Payload;
