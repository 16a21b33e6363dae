use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::SinkError;
use crate::metrics::Report;

const HEADER: &str = "timestamp|rpc|method|status_code|frt|trt|total_data_retrieved(KB)\n";
const BYTES_PER_KB: f64 = 1024.0;

/// Appends every sample of a report to a pipe-separated file, one line per
/// sample, for offline graphing.
#[derive(Debug, Clone)]
pub struct RecordsSink {
    path: PathBuf,
}

impl RecordsSink {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `report`, writing the header first if the file is empty.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened or written.
    pub async fn append(&self, report: &Report, at: DateTime<Utc>) -> Result<(), SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| SinkError::OpenRecords {
                path: self.path.clone(),
                source: err,
            })?;
        let is_new = file
            .metadata()
            .await
            .map(|meta| meta.len() == 0)
            .map_err(|err| self.write_error(err))?;

        let mut writer = BufWriter::new(file);
        if is_new {
            writer
                .write_all(HEADER.as_bytes())
                .await
                .map_err(|err| self.write_error(err))?;
        }

        let timestamp = at.to_rfc3339_opts(SecondsFormat::Secs, true);
        for method in &report.methods {
            for sample in &method.samples {
                let line = format!(
                    "{}|{}|{}|{}|{}|{}|{:.3}\n",
                    timestamp,
                    report.endpoint_id,
                    method.name,
                    sample.status_code,
                    sample.first_byte_latency_ms,
                    sample.total_latency_ms,
                    kilobytes(sample.bytes_read)
                );
                writer
                    .write_all(line.as_bytes())
                    .await
                    .map_err(|err| self.write_error(err))?;
            }
        }
        writer.flush().await.map_err(|err| self.write_error(err))?;
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::WriteRecords {
            path: self.path.clone(),
            source,
        }
    }
}

#[expect(clippy::float_arithmetic, reason = "Sizes are reported in fractional KB")]
const fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KB
}
