//! Domain Services

mod temp_artifact;

pub use temp_artifact::TempArtifact;
