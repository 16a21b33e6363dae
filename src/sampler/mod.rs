//! Concurrent, rate-gated sampling of one RPC method against one endpoint.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::EndpointConfig;
use crate::error::{AppError, AppResult};
use crate::http::{TimedCaller, TokenBucket};
use crate::metrics::{AverageMode, MethodStats, MethodStatsBuilder};
use crate::rpc::RpcCall;

/// Performs `endpoint.sample_size` calls of `call`, starting at most
/// `endpoint.rate_limit` of them per second, and reduces the samples.
///
/// Every sample runs in its own task; the join loop is the only reducer, so
/// no state is shared between in-flight calls.
///
/// # Errors
///
/// The first hard call failure aborts every sibling task and is returned.
/// No partial statistics are produced.
pub async fn sample_method(
    caller: &TimedCaller,
    endpoint: &EndpointConfig,
    call: RpcCall,
    average_mode: AverageMode,
) -> AppResult<MethodStats> {
    let sample_size = endpoint.sample_size.get();
    let bucket = Arc::new(TokenBucket::new(endpoint.rate_limit));
    let url = Arc::new(endpoint.endpoint.clone());
    let call = Arc::new(call);

    debug!(
        "Sampling {} on {} ({} samples, {} starts/s)",
        call.method,
        endpoint.id,
        sample_size,
        bucket.capacity()
    );

    let mut tasks = JoinSet::new();
    for _ in 0..sample_size {
        let bucket = Arc::clone(&bucket);
        let url = Arc::clone(&url);
        let call = Arc::clone(&call);
        let caller = caller.clone();
        tasks.spawn(async move {
            bucket.acquire().await;
            caller.call(&url, &call).await
        });
    }

    let mut stats = MethodStatsBuilder::new(&call.method, sample_size);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(sample)) => stats.record(sample),
            Ok(Err(err)) => {
                tasks.abort_all();
                warn!(
                    "{} on {} aborted after {} of {} samples: {}",
                    call.method,
                    endpoint.id,
                    stats.recorded(),
                    sample_size,
                    err
                );
                return Err(AppError::http(err));
            }
            Err(err) => {
                tasks.abort_all();
                return Err(AppError::from(err));
            }
        }
    }

    Ok(stats.finish(sample_size, average_mode))
}
