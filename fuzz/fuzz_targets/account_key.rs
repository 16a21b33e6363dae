#![no_main]

use libfuzzer_sys::fuzz_target;
use rpcpulse::rpc::AccountKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(key) = input.parse::<AccountKey>() {
            let reparsed = key.to_string().parse::<AccountKey>();
            debug_assert!(reparsed.is_ok_and(|other| other == key));
        }
    }
});
