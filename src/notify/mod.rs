//! Best-effort alert delivery.
mod telegram;

use async_trait::async_trait;
use tracing::warn;

use crate::error::NotifyError;

pub use telegram::TelegramNotifier;

/// Destination for plain-text alerts.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Delivers `text`.
    ///
    /// # Errors
    ///
    /// Returns an error when the alert could not be delivered.
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Used when no transport is configured; alerts only reach the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlySink;

#[async_trait]
impl AlertSink for LogOnlySink {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        warn!(alert = text, "alert");
        Ok(())
    }
}
