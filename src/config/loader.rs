use std::collections::HashSet;
use std::path::Path;

use tracing::info;
use url::Url;

use crate::args::PositiveUsize;
use crate::error::{AppError, AppResult, ConfigError};
use crate::rpc::{AccountKey, default_accounts};

use super::types::{
    CollectorConfig, ConfigFile, DEFAULT_SAMPLE_SIZE, EndpointConfig, MAX_SAMPLE_SIZE, RpcEntry,
};

/// Reads and validates the JSON config at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or
/// fails validation.
pub fn load_config(path: &Path) -> AppResult<CollectorConfig> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let file: ConfigFile = serde_json::from_str(&content).map_err(|err| {
        AppError::config(ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let config = parse_config(file)?;
    info!(
        "Loaded {} rpc(s) and {} account(s) from {}",
        config.rpcs.len(),
        config.accounts.len(),
        path.display()
    );
    Ok(config)
}

/// Validates a raw config file.
///
/// A sample size of 0 becomes [`DEFAULT_SAMPLE_SIZE`]; an empty account list
/// becomes the built-in defaults.
///
/// # Errors
///
/// Returns an error for an empty rpc list, empty or duplicate ids, endpoints
/// that are not http(s) URLs, a zero rate limit, a sample size above
/// [`MAX_SAMPLE_SIZE`], or undecodable accounts.
pub fn parse_config(file: ConfigFile) -> Result<CollectorConfig, ConfigError> {
    if file.rpcs.is_empty() {
        return Err(ConfigError::NoRpcs);
    }

    let mut seen = HashSet::with_capacity(file.rpcs.len());
    let mut rpcs = Vec::with_capacity(file.rpcs.len());
    for (index, entry) in file.rpcs.into_iter().enumerate() {
        let rpc = parse_rpc(index, entry)?;
        if !seen.insert(rpc.id.clone()) {
            return Err(ConfigError::DuplicateRpcId { id: rpc.id });
        }
        rpcs.push(rpc);
    }

    let accounts = if file.accounts.is_empty() {
        default_accounts().map_err(|err| ConfigError::InvalidAccount {
            value: "built-in default".to_owned(),
            source: err,
        })?
    } else {
        file.accounts
            .into_iter()
            .map(|value| {
                value
                    .parse::<AccountKey>()
                    .map_err(|err| ConfigError::InvalidAccount { value, source: err })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(CollectorConfig { rpcs, accounts })
}

fn parse_rpc(index: usize, entry: RpcEntry) -> Result<EndpointConfig, ConfigError> {
    let id = entry.id.trim().to_owned();
    if id.is_empty() {
        return Err(ConfigError::EmptyRpcId { index });
    }

    let endpoint = Url::parse(entry.endpoint.trim()).map_err(|err| {
        ConfigError::InvalidEndpoint {
            id: id.clone(),
            endpoint: entry.endpoint.clone(),
            source: err,
        }
    })?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            id,
            endpoint: entry.endpoint,
        });
    }

    let rate_limit = PositiveUsize::try_from(entry.rate_limit).map_err(|err| {
        ConfigError::InvalidRateLimit {
            id: id.clone(),
            source: err,
        }
    })?;
    if entry.sample_size > MAX_SAMPLE_SIZE {
        return Err(ConfigError::SampleSizeTooLarge {
            id,
            max: MAX_SAMPLE_SIZE,
        });
    }
    let sample_size =
        PositiveUsize::try_from(entry.sample_size).unwrap_or(DEFAULT_SAMPLE_SIZE);

    Ok(EndpointConfig {
        id,
        endpoint,
        rate_limit,
        sample_size,
    })
}
