//! Parquet file writer

use crate::error::{Error, Result};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Compression codec for written files (`compression` in the YAML config)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParquetCompression {
    /// Same default as pandas/pyarrow
    #[default]
    Snappy,
    Zstd,
    Gzip,
    Uncompressed,
}

impl ParquetCompression {
    /// Codec handed to the Parquet writer
    pub fn codec(self) -> Compression {
        match self {
            Self::Snappy => Compression::SNAPPY,
            Self::Zstd => Compression::ZSTD(ZstdLevel::default()),
            Self::Gzip => Compression::GZIP(GzipLevel::default()),
            Self::Uncompressed => Compression::UNCOMPRESSED,
        }
    }
}

/// Write `batch` to a new Parquet file at `path`, returning the row count
///
/// An existing file is replaced. Dictionary encoding and column statistics
/// stay at the Parquet defaults (both on).
pub fn write_batch_to_parquet(
    path: impl AsRef<Path>,
    batch: &RecordBatch,
    compression: ParquetCompression,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::output(format!("Failed to create file '{}': {e}", path.display())))?;

    let props = WriterProperties::builder()
        .set_compression(compression.codec())
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;

    Ok(batch.num_rows())
}
