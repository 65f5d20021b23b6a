//! Archive writer implementations

mod zip_writer;

pub use zip_writer::ZipArchiveWriter;
