use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::metrics::AverageMode;

use super::defaults::{DEFAULT_CONFIG_PATH, DEFAULT_INTERVAL};
use super::parsers::parse_interval;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Rate-limited JSON-RPC latency sampler - periodically benchmarks RPC providers and alerts on failures."
)]
pub struct CollectorArgs {
    /// Path to the JSON config listing rpcs and accounts
    #[arg(
        long = "config",
        short = 'c',
        env = "RPCPULSE_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Time between collection cycles, at least 10s (supports ms/s/m/h)
    #[arg(
        long = "interval",
        short = 'i',
        env = "RPCPULSE_INTERVAL",
        default_value = DEFAULT_INTERVAL,
        value_parser = parse_interval
    )]
    pub interval: Duration,

    /// Divisor for average latencies: the full sample size or positive samples only
    #[arg(
        long = "average-over",
        env = "RPCPULSE_AVERAGE_OVER",
        value_enum,
        default_value_t = AverageMode::SampleSize
    )]
    pub average_over: AverageMode,

    /// Append every sample to this pipe-separated records file
    #[arg(long = "records", env = "RPCPULSE_RECORDS")]
    pub records: Option<PathBuf>,

    /// Run a single collection cycle and exit
    #[arg(long = "once")]
    pub once: bool,

    /// Enable verbose logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
