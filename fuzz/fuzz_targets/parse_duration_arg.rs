#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(duration) = rpcpulse::args::parsers::parse_duration_arg(input) {
            debug_assert!(duration.as_millis() > 0);
        }
        if let Ok(interval) = rpcpulse::args::parsers::parse_interval(input) {
            debug_assert!(interval.as_secs() >= 10);
        }
    }
});
