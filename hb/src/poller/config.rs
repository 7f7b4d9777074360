//! Poller configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Poller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Pause between poll cycles in seconds, applied after every outcome
    #[serde(rename = "retry-interval-secs", default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
}

fn default_retry_interval_secs() -> u64 {
    600
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            retry_interval_secs: default_retry_interval_secs(),
        }
    }
}

impl PollerConfig {
    /// Get the retry interval as a Duration
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }
}
