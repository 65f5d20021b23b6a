//! File upload session command
//!
//! The command a remote-control client sends to place a local file on the
//! browser host: `POST {session}/file` with body `{"file": "<payload>"}`.
//! Dispatching the request belongs to the caller.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::ports::{Clock, FileSystem, TempDirProvider};
use crate::domain::value_objects::Payload;
use crate::error::UploadResult;

use super::PayloadBuilder;

/// HTTP verb a session command is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of the upload request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCommandBody<'a> {
    pub file: &'a Payload,
}

/// Upload command for one local file
#[derive(Debug, Clone)]
pub struct FileCommand {
    source: PathBuf,
    payload: Payload,
}

impl FileCommand {
    /// Session-relative path segment the command is sent to
    pub const ENDPOINT: &'static str = "file";

    /// Build the command with a local payload builder
    pub fn new(source: impl AsRef<Path>) -> UploadResult<Self> {
        Self::with_builder(source, &PayloadBuilder::local())
    }

    /// Build the command through the given builder
    pub fn with_builder<F, T, C>(
        source: impl AsRef<Path>,
        builder: &PayloadBuilder<F, T, C>,
    ) -> UploadResult<Self>
    where
        F: FileSystem,
        T: TempDirProvider,
        C: Clock,
    {
        let source = source.as_ref();
        let payload = builder.build_payload(source)?;
        Ok(Self {
            source: source.to_path_buf(),
            payload,
        })
    }

    pub fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn body(&self) -> FileCommandBody<'_> {
        FileCommandBody {
            file: &self.payload,
        }
    }

    /// Request body as a JSON value
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::json!({ "file": self.payload.as_str() })
    }

    /// Request URL under a session URL, e.g. `http://host/wd/hub/session/42/file`
    pub fn url(&self, session_url: &str) -> String {
        format!("{}/{}", session_url.trim_end_matches('/'), Self::ENDPOINT)
    }
}
