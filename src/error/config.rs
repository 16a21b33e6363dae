use super::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config must list at least one rpc.")]
    NoRpcs,
    #[error("Rpc {index} has an empty id.")]
    EmptyRpcId { index: usize },
    #[error("Rpc id '{id}' is defined more than once.")]
    DuplicateRpcId { id: String },
    #[error("Invalid endpoint '{endpoint}' for rpc '{id}': {source}")]
    InvalidEndpoint {
        id: String,
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint '{endpoint}' for rpc '{id}' must use http or https.")]
    UnsupportedScheme { id: String, endpoint: String },
    #[error("Rpc '{id}' rateLimit must be >= 1: {source}")]
    InvalidRateLimit {
        id: String,
        #[source]
        source: ValidationError,
    },
    #[error("Rpc '{id}' sampleSize must be <= {max}.")]
    SampleSizeTooLarge { id: String, max: usize },
    #[error("Invalid account '{value}': {source}")]
    InvalidAccount {
        value: String,
        #[source]
        source: ValidationError,
    },
}
