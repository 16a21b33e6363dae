use std::time::{Duration, Instant};

use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::HttpError;
use crate::metrics::Sample;
use crate::rpc::{RpcCall, RpcResponse};

/// Deadline for one call, from send until the body is drained.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("rpcpulse/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every sampler.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_client() -> Result<Client, HttpError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| HttpError::BuildClientFailed { source: err })
}

/// Issues one JSON-RPC POST and measures it.
#[derive(Debug, Clone)]
pub struct TimedCaller {
    client: Client,
    timeout: Duration,
}

impl TimedCaller {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self {
            client,
            timeout: CALL_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            client: self.client,
            timeout,
        }
    }

    /// Sends `call` to `endpoint` and returns the measured sample.
    ///
    /// A non-200 status and a JSON-RPC error envelope are reported on the
    /// sample, not as errors.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built, the transport
    /// fails, the deadline passes, the body cannot be read, or the body is
    /// not a JSON-RPC envelope.
    pub async fn call(&self, endpoint: &Url, call: &RpcCall) -> Result<Sample, HttpError> {
        match tokio::time::timeout(self.timeout, self.execute(endpoint, call)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(HttpError::Timeout {
                timeout: self.timeout,
            }),
        }
    }

    async fn execute(&self, endpoint: &Url, call: &RpcCall) -> Result<Sample, HttpError> {
        let payload =
            serde_json::to_vec(call).map_err(|err| HttpError::EncodeRequest { source: err })?;
        let request = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload)
            .build()
            .map_err(|err| HttpError::BuildRequestFailed { source: err })?;

        let started = Instant::now();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| HttpError::RequestFailed { source: err })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(
                "{} {} answered with status {}",
                endpoint,
                call.method,
                status.as_u16()
            );
            return Ok(Sample::unexpected_status(status.as_u16()));
        }

        let mut first_byte: Option<Duration> = None;
        let mut body: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|err| HttpError::ReadBody { source: err })?;
            if first_byte.is_none() {
                first_byte = Some(started.elapsed());
            }
            body.extend_from_slice(&bytes);
        }
        let total = started.elapsed();

        let envelope: Option<RpcResponse> = serde_json::from_slice(&body)
            .map_err(|err| HttpError::DecodeResponse { source: err })?;

        Ok(Sample {
            status_code: status.as_u16(),
            first_byte_latency_ms: millis(first_byte.unwrap_or(total)),
            total_latency_ms: millis(total),
            bytes_read: u64::try_from(body.len()).unwrap_or(u64::MAX),
            error_message: envelope
                .as_ref()
                .and_then(RpcResponse::error_message)
                .map(str::to_owned),
        })
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
