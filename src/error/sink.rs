use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to open records file '{path}': {source}")]
    OpenRecords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write records file '{path}': {source}")]
    WriteRecords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
