//! StatusClient trait and the Practicum HTTP implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::types::PollCursor;
use crate::config::ApiConfig;
use crate::error::{PollError, describe_chain};

/// One outbound status query per call, no retries
///
/// Retrying is the poll loop's job through its fixed interval.
#[async_trait]
pub trait StatusClient: Send + Sync {
    /// Query the API for changes since `cursor`
    ///
    /// Returns the decoded body untyped; its shape is checked by
    /// [`crate::api::validate`].
    async fn fetch(&self, cursor: PollCursor) -> Result<Value, PollError>;
}

/// Homework status API client
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: Client,
}

impl PracticumClient {
    /// Create a client from config and the API token
    pub fn from_config(config: &ApiConfig, token: impl Into<String>) -> Result<Self, PollError> {
        debug!(endpoint = %config.endpoint, timeout_ms = config.timeout_ms, "PracticumClient::from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PollError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            token: token.into(),
            http,
        })
    }
}

#[async_trait]
impl StatusClient for PracticumClient {
    async fn fetch(&self, cursor: PollCursor) -> Result<Value, PollError> {
        let from_date = cursor.from_date(chrono::Utc::now().timestamp());
        debug!(%from_date, "PracticumClient::fetch: called");

        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "PracticumClient::fetch: transport error");
                // Alert text must not vary with the cursor in the URL
                PollError::Transport(describe_chain(&e.without_url()))
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            debug!(%status, "PracticumClient::fetch: endpoint unavailable");
            return Err(PollError::EndpointUnavailable(status));
        }

        response.json::<Value>().await.map_err(|e| {
            debug!(error = %e, "PracticumClient::fetch: body is not JSON");
            PollError::MalformedResponse(format!("body is not JSON: {}", e))
        })
    }
}
