use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::NotifyError;

use super::AlertSink;

const API_BASE: &str = "https://api.telegram.org";
const API_KEY_ENV: &str = "TGBOT_API_KEY";
const SUBSCRIBERS_ENV: &str = "NOTIFIER_SUBS";

#[derive(Debug, Serialize)]
struct SendMessage<'msg> {
    chat_id: &'msg str,
    text: &'msg str,
}

/// Sends alerts through a Telegram bot's `sendMessage` method, once per
/// subscribed chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_api_key: String,
    subscribers: Vec<String>,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(client: Client, bot_api_key: &str, subscribers: Vec<String>) -> Self {
        Self {
            client,
            api_base: API_BASE.to_owned(),
            bot_api_key: bot_api_key.to_owned(),
            subscribers,
        }
    }

    /// Reads `TGBOT_API_KEY` and the comma-separated `NOTIFIER_SUBS`.
    /// Returns `None` when either is missing or empty.
    #[must_use]
    pub fn from_env(client: Client) -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok()?;
        let subscribers = std::env::var(SUBSCRIBERS_ENV).ok()?;
        Self::from_parts(client, &api_key, &subscribers)
    }

    fn from_parts(client: Client, api_key: &str, subscribers: &str) -> Option<Self> {
        let api_key = api_key.trim();
        let subscribers = parse_subscribers(subscribers);
        if api_key.is_empty() || subscribers.is_empty() {
            return None;
        }
        Some(Self::new(client, api_key, subscribers))
    }

    #[must_use]
    pub fn with_api_base(self, api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_owned(),
            ..self
        }
    }

    #[must_use]
    pub fn subscribers(&self) -> &[String] {
        &self.subscribers
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_api_key)
    }
}

#[async_trait]
impl AlertSink for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let url = self.send_message_url();
        for chat_id in &self.subscribers {
            let body = serde_json::to_vec(&SendMessage { chat_id, text })
                .map_err(|err| NotifyError::Encode { source: err })?;
            let response = self
                .client
                .post(&url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(|err| NotifyError::Delivery {
                    chat_id: chat_id.clone(),
                    source: err,
                })?;
            let status = response.status();
            if !status.is_success() {
                return Err(NotifyError::Rejected {
                    chat_id: chat_id.clone(),
                    status: status.as_u16(),
                });
            }
            debug!("Alert delivered to {}", chat_id);
        }
        Ok(())
    }
}

fn parse_subscribers(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|chat_id| !chat_id.is_empty())
        .map(str::to_owned)
        .collect()
}
