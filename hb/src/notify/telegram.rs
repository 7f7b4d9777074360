//! Telegram Bot API notifier

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::Notifier;
use crate::config::TelegramConfig;
use crate::error::{PollError, describe_chain};

/// Sends messages to one chat through `sendMessage`
pub struct TelegramNotifier {
    url: String,
    chat_id: String,
    http: Client,
}

impl TelegramNotifier {
    /// Create a notifier from config, bot token and destination chat
    pub fn from_config(
        config: &TelegramConfig,
        bot_token: &str,
        chat_id: impl Into<String>,
    ) -> Result<Self, PollError> {
        debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "TelegramNotifier::from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PollError::DeliveryFailed(e.to_string()))?;

        Ok(Self {
            url: format!("{}/bot{}/sendMessage", config.base_url.trim_end_matches('/'), bot_token),
            chat_id: chat_id.into(),
            http,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), PollError> {
        debug!(chat_id = %self.chat_id, len = text.len(), "TelegramNotifier::send: called");
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self.http.post(&self.url).json(&body).send().await.map_err(|e| {
            debug!(error = %e, "TelegramNotifier::send: transport error");
            PollError::DeliveryFailed(describe_chain(&e.without_url()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "TelegramNotifier::send: API error");
            return Err(PollError::DeliveryFailed(format!("{}: {}", status.as_u16(), text)));
        }

        debug!("TelegramNotifier::send: delivered");
        Ok(())
    }
}
