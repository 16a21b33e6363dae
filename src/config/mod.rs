//! Configuration file loading and validation.
mod loader;
pub mod types;


pub use loader::{load_config, parse_config};
pub use types::{
    CollectorConfig, ConfigFile, DEFAULT_SAMPLE_SIZE, EndpointConfig, MAX_SAMPLE_SIZE, RpcEntry,
};
