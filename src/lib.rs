//! Core library for the `rpcpulse` collector.
//!
//! `rpcpulse` benchmarks JSON-RPC endpoints on an interval: every cycle it
//! sends a rate-limited burst of `getAccountInfo` and `getMultipleAccounts`
//! calls to each configured endpoint, measures first-byte and total latency,
//! and reduces the samples into per-method statistics. Failures are routed to
//! an alert sink.
//!
//! The layers, leaves first: [`http`] (token bucket and timed caller),
//! [`sampler`] (one method against one endpoint), [`collector`] (every
//! supported method against one endpoint) and [`scheduler`] (every endpoint,
//! every interval).
pub mod args;
pub mod collector;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod notify;
pub mod rpc;
pub mod sampler;
pub mod scheduler;
pub mod shutdown;
pub mod sinks;

#[cfg(test)]
pub(crate) mod test_support;
