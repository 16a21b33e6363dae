#![no_main]

use libfuzzer_sys::fuzz_target;
use rpcpulse::config::{ConfigFile, parse_config};

fuzz_target!(|data: &[u8]| {
    let Ok(file) = serde_json::from_slice::<ConfigFile>(data) else {
        return;
    };
    if let Ok(config) = parse_config(file) {
        debug_assert!(!config.rpcs.is_empty());
        debug_assert!(!config.accounts.is_empty());
        for rpc in &config.rpcs {
            debug_assert!(!rpc.id.is_empty());
            debug_assert!(rpc.rate_limit.get() >= 1);
            debug_assert!(rpc.sample_size.get() >= 1);
        }
    }
});
