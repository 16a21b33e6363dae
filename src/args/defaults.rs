use std::time::Duration;

pub(crate) const DEFAULT_CONFIG_PATH: &str = "rpc.json";
pub(crate) const DEFAULT_INTERVAL: &str = "5m";
/// Shorter intervals would hammer the monitored providers.
pub(crate) const MIN_INTERVAL: Duration = Duration::from_secs(10);
