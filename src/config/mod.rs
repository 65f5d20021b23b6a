//! Configuration module
//!
//! Precedence, highest first:
//! 1. CLI flags (`--tmp-dir`)
//! 2. Environment variables (`UPLOAD_PAYLOAD_*`)
//! 3. Config file (`--config`, or `<config dir>/upload-payload/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_or_default, load_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning,
};
pub use types::{ArchiveConfig, Config, TempConfig};
