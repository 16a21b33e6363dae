use std::time::Duration;

use thiserror::Error;

/// Hard failures of a single timed call.
///
/// Any of these aborts the whole sampling batch it belongs to. Non-200
/// statuses and JSON-RPC error envelopes are not errors; they are recorded on
/// the sample instead.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to encode request: {source}")]
    EncodeRequest {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    RequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request timed out after {}s.", timeout.as_secs())]
    Timeout { timeout: Duration },
    #[error("Failed to read response body: {source}")]
    ReadBody {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to decode response: {source}")]
    DecodeResponse {
        #[source]
        source: serde_json::Error,
    },
}
