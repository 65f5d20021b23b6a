//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Compression;
use crate::error::UploadResult;

use super::loader::{self, ConfigWarning};

/// Where temporary artifacts are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempConfig {
    /// Overrides the platform temp directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// How the payload archive is written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default)]
    pub compression: Compression,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub temp: TempConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,
}

impl Config {
    /// Load configuration from a TOML file, dropping unknown-key warnings
    pub fn load(path: &Path) -> UploadResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> UploadResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
