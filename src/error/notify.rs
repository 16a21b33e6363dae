use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to encode alert: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to deliver alert to '{chat_id}': {source}")]
    Delivery {
        chat_id: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Alert to '{chat_id}' was rejected with status {status}.")]
    Rejected { chat_id: String, status: u16 },
}
