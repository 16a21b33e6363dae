use clap::ValueEnum;

/// HTTP status counted as a positive sample.
pub const POSITIVE_STATUS: u16 = 200;

/// Outcome of one timed call. Latencies are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub status_code: u16,
    pub first_byte_latency_ms: u64,
    pub total_latency_ms: u64,
    pub bytes_read: u64,
    pub error_message: Option<String>,
}

impl Sample {
    /// A sample for a non-200 response. The body is never read for these.
    #[must_use]
    pub fn unexpected_status(status_code: u16) -> Self {
        Self {
            status_code,
            first_byte_latency_ms: 0,
            total_latency_ms: 0,
            bytes_read: 0,
            error_message: Some(format!(
                "received unexpected status code: {}",
                status_code
            )),
        }
    }

    /// Classification is by HTTP status only; a JSON-RPC error envelope on a
    /// 200 response is still positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.status_code == POSITIVE_STATUS
    }
}

/// Divisor used when averaging latencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AverageMode {
    /// Divide by the full sample size. Negative samples contribute zero and
    /// pull the average down.
    #[default]
    SampleSize,
    /// Divide by the number of positive samples only.
    Positive,
}

/// Summary of one method sampled `sample_size` times against one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodStats {
    pub name: String,
    pub samples: Vec<Sample>,
    pub error_messages: Vec<String>,
    pub avg_first_byte_latency_ms: f64,
    pub avg_total_latency_ms: f64,
    pub total_bytes_read: u64,
    pub positive_count: usize,
    pub negative_count: usize,
}

impl MethodStats {
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.error_messages.first().map(String::as_str)
    }
}

/// Result of one collection cycle for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub endpoint_id: String,
    pub methods: Vec<MethodStats>,
}
