use super::types::{AverageMode, MethodStats, Sample};

/// Running sums for one method while its samples complete.
///
/// Only positive samples feed the latency and byte sums. Every sample that
/// carries an error message has it appended, including 200 responses with a
/// JSON-RPC error envelope.
#[derive(Debug)]
pub struct MethodStatsBuilder {
    name: String,
    samples: Vec<Sample>,
    error_messages: Vec<String>,
    first_byte_sum_ms: u64,
    total_sum_ms: u64,
    total_bytes_read: u64,
    positive_count: usize,
    negative_count: usize,
}

impl MethodStatsBuilder {
    #[must_use]
    pub fn new(name: &str, sample_size: usize) -> Self {
        Self {
            name: name.to_owned(),
            samples: Vec::with_capacity(sample_size),
            error_messages: Vec::new(),
            first_byte_sum_ms: 0,
            total_sum_ms: 0,
            total_bytes_read: 0,
            positive_count: 0,
            negative_count: 0,
        }
    }

    pub fn record(&mut self, sample: Sample) {
        if let Some(message) = sample.error_message.as_ref() {
            self.error_messages.push(message.clone());
        }

        if sample.is_positive() {
            self.positive_count = self.positive_count.saturating_add(1);
            self.first_byte_sum_ms = self
                .first_byte_sum_ms
                .saturating_add(sample.first_byte_latency_ms);
            self.total_sum_ms = self.total_sum_ms.saturating_add(sample.total_latency_ms);
            self.total_bytes_read = self.total_bytes_read.saturating_add(sample.bytes_read);
        } else {
            self.negative_count = self.negative_count.saturating_add(1);
        }

        self.samples.push(sample);
    }

    #[must_use]
    pub fn recorded(&self) -> usize {
        self.samples.len()
    }

    /// Divides the sums. With [`AverageMode::SampleSize`] the divisor is
    /// `sample_size`, not the number of positive samples.
    #[must_use]
    pub fn finish(self, sample_size: usize, mode: AverageMode) -> MethodStats {
        let divisor = match mode {
            AverageMode::SampleSize => sample_size,
            AverageMode::Positive => self.positive_count,
        };

        MethodStats {
            name: self.name,
            samples: self.samples,
            error_messages: self.error_messages,
            avg_first_byte_latency_ms: average_ms(self.first_byte_sum_ms, divisor),
            avg_total_latency_ms: average_ms(self.total_sum_ms, divisor),
            total_bytes_read: self.total_bytes_read,
            positive_count: self.positive_count,
            negative_count: self.negative_count,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Averages are reported as fractional milliseconds"
)]
const fn average_ms(sum_ms: u64, divisor: usize) -> f64 {
    if divisor == 0 {
        return 0.0;
    }
    sum_ms as f64 / divisor as f64
}
