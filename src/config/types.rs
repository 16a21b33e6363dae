use serde::Deserialize;
use url::Url;

use crate::args::PositiveUsize;
use crate::rpc::AccountKey;

/// Sample size used when an rpc entry omits it or sets it to 0.
pub const DEFAULT_SAMPLE_SIZE: PositiveUsize = PositiveUsize::ONE;
/// Upper bound on samples per method and cycle.
pub const MAX_SAMPLE_SIZE: usize = 10_000;

/// Raw config file, as written by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub rpcs: Vec<RpcEntry>,
    #[serde(default)]
    pub accounts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEntry {
    pub id: String,
    pub endpoint: String,
    pub rate_limit: usize,
    #[serde(default)]
    pub sample_size: usize,
}

/// One monitored RPC provider. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub id: String,
    pub endpoint: Url,
    pub rate_limit: PositiveUsize,
    pub sample_size: PositiveUsize,
}

/// Validated configuration shared by every collection cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub rpcs: Vec<EndpointConfig>,
    pub accounts: Vec<AccountKey>,
}
