//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{UploadError, UploadResult};

use super::types::Config;

/// Environment variable overriding `[temp] dir`
pub const ENV_TMPDIR: &str = "UPLOAD_PAYLOAD_TMPDIR";

/// Environment variable overriding `[archive] compression`
pub const ENV_COMPRESSION: &str = "UPLOAD_PAYLOAD_COMPRESSION";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> UploadResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| UploadError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| UploadError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Default user config location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("upload-payload").join("config.toml"))
}

/// Load from the user config, or defaults, then apply env overrides
///
/// A broken user config is reported and skipped rather than aborting.
pub fn load_or_default() -> Config {
    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => {
                    for warning in &warnings {
                        warn!("{}", warning);
                    }
                    debug!(path = %user_config.display(), "loaded user config");
                    return with_env_overrides(config);
                }
                Err(err) => warn!("ignoring user config: {}", err),
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (UPLOAD_PAYLOAD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = lookup(ENV_TMPDIR).filter(|d| !d.trim().is_empty()) {
        config.temp.dir = Some(PathBuf::from(dir));
    }

    if let Some(value) = lookup(ENV_COMPRESSION) {
        match value.parse() {
            Ok(compression) => config.archive.compression = compression,
            Err(err) => warn!("ignoring {}: {}", ENV_COMPRESSION, err),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["temp", "dir", "archive", "compression"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
