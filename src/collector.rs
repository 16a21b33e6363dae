//! Runs every supported method against one endpoint.
use tracing::debug;

use crate::config::EndpointConfig;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::TimedCaller;
use crate::metrics::{AverageMode, Report};
use crate::rpc::{AccountKey, RpcMethod};
use crate::sampler::sample_method;

/// Samples each of [`RpcMethod::SUPPORTED`] in order and returns the report.
///
/// # Errors
///
/// Fails when `accounts` is empty, or with the first method failure; later
/// methods are not attempted once one has failed.
pub async fn collect_endpoint(
    caller: &TimedCaller,
    endpoint: &EndpointConfig,
    accounts: &[AccountKey],
    average_mode: AverageMode,
) -> AppResult<Report> {
    if accounts.is_empty() {
        return Err(AppError::validation(ValidationError::NoAccounts));
    }

    let mut methods = Vec::with_capacity(RpcMethod::SUPPORTED.len());
    for method in RpcMethod::SUPPORTED {
        let Some(call) = method.build_call(accounts) else {
            debug!("{} has no request to send; skipping", method);
            continue;
        };
        let stats = sample_method(caller, endpoint, call, average_mode).await?;
        methods.push(stats);
    }

    Ok(Report {
        endpoint_id: endpoint.id.clone(),
        methods,
    })
}
