//! Zip archive writer
//!
//! Implements the ArchiveWriter port with the `zip` crate. Each writer owns at
//! most one open archive.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::ports::{ArchiveError, ArchiveResult, ArchiveWriter};
use crate::domain::value_objects::Compression;

/// Writes a zip archive to disk
pub struct ZipArchiveWriter {
    compression: Compression,
    inner: Option<ZipWriter<File>>,
}

impl ZipArchiveWriter {
    pub fn new(compression: Compression) -> Self {
        Self {
            compression,
            inner: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    fn method(&self) -> CompressionMethod {
        match self.compression {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        }
    }
}

impl Default for ZipArchiveWriter {
    fn default() -> Self {
        Self::new(Compression::default())
    }
}

impl std::fmt::Debug for ZipArchiveWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipArchiveWriter")
            .field("compression", &self.compression)
            .field("open", &self.is_open())
            .finish()
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn open(&mut self, path: &Path, create: bool) -> ArchiveResult<()> {
        if self.inner.is_some() {
            return Err(ArchiveError::AlreadyOpen);
        }

        let writer = if create {
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)?;
            ZipWriter::new(file)
        } else {
            let file = OpenOptions::new().read(true).write(true).open(path)?;
            ZipWriter::new_append(file)?
        };

        self.inner = Some(writer);
        Ok(())
    }

    fn add_file(&mut self, path: &Path) -> ArchiveResult<()> {
        let method = self.method();
        let writer = self.inner.as_mut().ok_or(ArchiveError::NotOpen)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ArchiveError::InvalidEntryName(path.to_path_buf()))?;

        let mut source = File::open(path)?;
        let options = SimpleFileOptions::default().compression_method(method);
        writer.start_file(name, options)?;
        io::copy(&mut source, writer)?;
        Ok(())
    }

    fn close(&mut self) -> ArchiveResult<()> {
        let writer = self.inner.take().ok_or(ArchiveError::NotOpen)?;
        writer.finish()?;
        Ok(())
    }
}
