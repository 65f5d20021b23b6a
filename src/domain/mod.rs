//! Domain Layer
//!
//! Payload concepts and the ports the payload builder talks through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ArtifactName, Payload, Compression)
//! - `services/` - Domain services (TempArtifact cleanup guard)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - File access goes through the `FileSystem` port
//! 2. **Ports & Adapters** - Temp directory, clock and archive writer are injectable

pub mod ports;
pub mod services;
pub mod value_objects;
