#![no_main]

use libfuzzer_sys::fuzz_target;
use rpcpulse::rpc::RpcResponse;

fuzz_target!(|data: &[u8]| {
    if let Ok(Some(response)) = serde_json::from_slice::<Option<RpcResponse>>(data) {
        let _message = response.error_message();
    }
});
