//! Periodic collection across every configured endpoint.
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, warn};

use crate::collector::collect_endpoint;
use crate::config::{CollectorConfig, EndpointConfig};
use crate::http::TimedCaller;
use crate::metrics::{AverageMode, MethodStats, Report};
use crate::notify::AlertSink;
use crate::shutdown::ShutdownReceiver;
use crate::sinks::RecordsSink;

const BYTES_PER_MB: f64 = 1_048_576.0;

pub struct Scheduler {
    caller: TimedCaller,
    config: CollectorConfig,
    alerts: Arc<dyn AlertSink>,
    interval: Duration,
    average_mode: AverageMode,
    records: Option<RecordsSink>,
}

impl Scheduler {
    #[must_use]
    pub fn new(
        caller: TimedCaller,
        config: CollectorConfig,
        alerts: Arc<dyn AlertSink>,
        interval: Duration,
    ) -> Self {
        Self {
            caller,
            config,
            alerts,
            interval,
            average_mode: AverageMode::default(),
            records: None,
        }
    }

    #[must_use]
    pub fn with_average_mode(self, average_mode: AverageMode) -> Self {
        Self {
            average_mode,
            ..self
        }
    }

    #[must_use]
    pub fn with_records(self, records: Option<RecordsSink>) -> Self {
        Self { records, ..self }
    }

    /// Runs a cycle immediately, then one every interval, until shutdown is
    /// broadcast. A cycle in progress is abandoned on shutdown.
    pub async fn run(&self, mut shutdown_rx: ShutdownReceiver) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(
            "Collecting {} rpc(s) every {}s",
            self.config.rpcs.len(),
            self.interval.as_secs()
        );

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {}
            }
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = self.run_cycle() => {}
            }
        }
        info!("Collector stopped");
    }

    /// Collects every endpoint once, in config order, and returns the
    /// reports of the endpoints that succeeded.
    pub async fn run_cycle(&self) -> Vec<Report> {
        let cycle_started = Utc::now();
        let mut reports = Vec::with_capacity(self.config.rpcs.len());

        for rpc in &self.config.rpcs {
            let report = match collect_endpoint(
                &self.caller,
                rpc,
                &self.config.accounts,
                self.average_mode,
            )
            .await
            {
                Ok(report) => report,
                Err(err) => {
                    error!(rpc_name = %rpc.id, error = %err, "collect_endpoint failed");
                    self.alert(format!("{} {}", rpc.id, err)).await;
                    continue;
                }
            };

            for method in &report.methods {
                self.handle_method(rpc, method).await;
            }

            if let Some(records) = self.records.as_ref()
                && let Err(err) = records.append(&report, cycle_started).await
            {
                warn!("Failed to append records to {}: {}", records.path().display(), err);
            }
            reports.push(report);
        }

        info!(
            "Cycle finished: {} of {} rpc(s) collected",
            reports.len(),
            self.config.rpcs.len()
        );
        reports
    }

    async fn handle_method(&self, rpc: &EndpointConfig, method: &MethodStats) {
        if let Some(first_error) = method.first_error() {
            for err_msg in &method.error_messages {
                debug!(
                    rpc_name = %rpc.id,
                    sample_size = rpc.sample_size.get(),
                    method_name = %method.name,
                    err_msg = %err_msg,
                    "errors encountered on rpc"
                );
            }
            // Only the first error per method is alerted.
            self.alert(format!("{} {}", rpc.id, first_error)).await;
            return;
        }

        info!(
            rpc_name = %rpc.id,
            sample_size = rpc.sample_size.get(),
            method_name = %method.name,
            avg_frt_ms = method.avg_first_byte_latency_ms,
            avg_trt_ms = method.avg_total_latency_ms,
            positive_count = method.positive_count,
            negative_count = method.negative_count,
            total_data_retrieved_mb = megabytes(method.total_bytes_read),
            "rpc results"
        );
    }

    async fn alert(&self, text: String) {
        if let Err(err) = self.alerts.notify(&text).await {
            warn!("Failed to deliver alert: {}", err);
        }
    }
}

#[expect(clippy::float_arithmetic, reason = "Sizes are reported in fractional MB")]
const fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}
