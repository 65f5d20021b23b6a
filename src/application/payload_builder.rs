//! Payload Builder
//!
//! Turns a local file into the `file` field of a session upload request:
//! the bytes are copied into a temp file, zipped as the archive's only
//! entry, read back and base64-encoded. Every temp artifact is removed
//! before the call returns, whichever way it returns.

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::domain::ports::{ArchiveWriter, Clock, FileSystem, TempDirProvider};
use crate::domain::services::TempArtifact;
use crate::domain::value_objects::{ArtifactName, Compression, Payload};
use crate::error::{IoAction, UploadError, UploadResult};
use crate::infrastructure::{FixedTempDir, LocalFs, SystemClock, SystemTempDir, ZipArchiveWriter};

/// Builds upload payloads through injected ports
///
/// Holds no per-call state: each call gets its own archive writer, so one
/// builder can serve concurrent callers when its ports allow it.
#[derive(Debug, Clone)]
pub struct PayloadBuilder<F, T, C> {
    fs: F,
    temp_dir: T,
    clock: C,
    compression: Compression,
}

impl PayloadBuilder<LocalFs, SystemTempDir, SystemClock> {
    /// Local disk, platform temp directory, wall clock
    pub fn local() -> Self {
        Self::new(LocalFs::new(), SystemTempDir, SystemClock)
    }
}

impl PayloadBuilder<LocalFs, FixedTempDir, SystemClock> {
    /// Local builder honouring the `[temp]` and `[archive]` settings
    pub fn from_config(config: &Config) -> Self {
        let dir = config
            .temp
            .dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        Self::new(LocalFs::new(), FixedTempDir::new(dir), SystemClock)
            .with_compression(config.archive.compression)
    }
}

impl<F, T, C> PayloadBuilder<F, T, C>
where
    F: FileSystem,
    T: TempDirProvider,
    C: Clock,
{
    pub fn new(fs: F, temp_dir: T, clock: C) -> Self {
        Self {
            fs,
            temp_dir,
            clock,
            compression: Compression::default(),
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Build the payload with a fresh zip writer
    pub fn build_payload(&self, source: impl AsRef<Path>) -> UploadResult<Payload> {
        self.build_payload_with(source, ZipArchiveWriter::new(self.compression))
    }

    /// Build the payload with a caller-provided archive writer
    pub fn build_payload_with<W: ArchiveWriter>(
        &self,
        source: impl AsRef<Path>,
        mut writer: W,
    ) -> UploadResult<Payload> {
        let source = source.as_ref();

        if !self.fs.is_file(source) {
            return Err(UploadError::InvalidArgument {
                path: source.to_path_buf(),
            });
        }

        let contents = self
            .fs
            .read(source)
            .map_err(|e| UploadError::io(IoAction::ReadSource, source, e))?;

        let archive = self.archive_file(source, &contents, &mut writer)?;

        let bytes = self
            .fs
            .read(archive.path())
            .map_err(|e| UploadError::UnreadableArchive {
                path: archive.path().to_path_buf(),
                source: e,
            })?;
        let payload = Payload::encode(&bytes);

        debug!(
            source = %source.display(),
            source_bytes = contents.len(),
            archive_bytes = bytes.len(),
            payload_len = payload.as_str().len(),
            "built upload payload"
        );

        archive.remove();
        Ok(payload)
    }

    /// Zip `contents` under a generated name and return the guarded archive
    fn archive_file<W: ArchiveWriter>(
        &self,
        source: &Path,
        contents: &[u8],
        writer: &mut W,
    ) -> UploadResult<TempArtifact<'_, F>> {
        let name = ArtifactName::derive(self.clock.now(), source);
        let tmp_dir = self.temp_dir.temp_dir();
        let zip_path = tmp_dir.join(name.archive_file_name());

        debug!(artifact = %name, tmp_dir = %tmp_dir.display(), "creating zip archive");

        writer
            .open(&zip_path, true)
            .map_err(|e| UploadError::io(IoAction::CreateArchive, &zip_path, e))?;
        let archive = TempArtifact::new(&self.fs, zip_path);

        let filled = self.fill_archive(source, contents, &tmp_dir, &name, writer);
        if filled.is_err() {
            // Release the archive handle before its guard deletes the file.
            if let Err(err) = writer.close() {
                debug!(
                    path = %archive.path().display(),
                    error = %err,
                    "failed to close archive after error"
                );
            }
        }
        filled?;

        Ok(archive)
    }

    fn fill_archive<W: ArchiveWriter>(
        &self,
        source: &Path,
        contents: &[u8],
        tmp_dir: &Path,
        name: &ArtifactName,
        writer: &mut W,
    ) -> UploadResult<()> {
        let tmp_path = tmp_dir.join(name.temp_file_name(source));
        self.fs
            .write_new(&tmp_path, contents)
            .map_err(|e| UploadError::io(IoAction::WriteTempFile, &tmp_path, e))?;
        let tmp_file = TempArtifact::new(&self.fs, tmp_path);

        writer
            .add_file(tmp_file.path())
            .map_err(|e| UploadError::io(IoAction::AddEntry, tmp_file.path(), e))?;

        writer.close().map_err(|e| {
            UploadError::io(
                IoAction::CloseArchive,
                tmp_dir.join(name.archive_file_name()),
                e,
            )
        })?;

        tmp_file.remove();
        Ok(())
    }
}
