//! Rate-gated, timed JSON-RPC calls.
mod caller;
mod rate;


pub use caller::{CALL_TIMEOUT, TimedCaller, build_client};
pub use rate::TokenBucket;
