//! Common test utilities for payload and CLI tests.
//!
//! - `Workspace`: isolated source and temp directories
//! - `unzip_payload`: decode a payload into its archive entries
//! - `run_cli`: run the `upload-payload` binary

#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tempfile::TempDir;
use upload_payload::{FixedTempDir, LocalFs, PayloadBuilder, SystemClock};

/// Separate directories for source files and temporary artifacts, so the
/// temp directory can be checked for leftovers.
pub struct Workspace {
    pub sources: TempDir,
    pub tmp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            sources: TempDir::new().unwrap(),
            tmp: TempDir::new().unwrap(),
        }
    }

    /// Create a source file with the given bytes
    pub fn source(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.sources.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn builder(&self) -> PayloadBuilder<LocalFs, FixedTempDir, SystemClock> {
        PayloadBuilder::new(LocalFs::new(), FixedTempDir::new(self.tmp.path()), SystemClock)
    }

    /// Everything left in the temp directory
    pub fn leftovers(&self) -> Vec<PathBuf> {
        list_dir(self.tmp.path())
    }
}

pub fn list_dir(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    entries.sort();
    entries
}

/// Decode a payload string into (entry name, bytes) pairs
pub fn unzip_payload(payload: &str) -> Vec<(String, Vec<u8>)> {
    let bytes = STANDARD
        .decode(payload.trim())
        .expect("payload is valid base64");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("payload is a zip");
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let mut data = Vec::new();
            entry.read_to_end(&mut data).unwrap();
            (entry.name().to_string(), data)
        })
        .collect()
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run the binary with isolated config lookup
pub fn run_cli(args: &[&str], env: &[(&str, &str)]) -> CliOutput {
    let config_home = TempDir::new().unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_upload-payload"));
    cmd.args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("UPLOAD_PAYLOAD_TMPDIR")
        .env_remove("UPLOAD_PAYLOAD_COMPRESSION")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    CliOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
