//! Suppression of repeated error alerts

use tracing::{debug, warn};

use super::Notifier;
use crate::error::PollError;

/// Error alert raised by the poll loop for a recoverable failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub message: String,
}

impl AlertEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&PollError> for AlertEvent {
    fn from(error: &PollError) -> Self {
        Self::new(error.to_string())
    }
}

/// What happened to an alert handed to [`AlertDeduper::alert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertDisposition {
    /// Delivered to the chat
    Delivered,
    /// Same text as the previous alert, not delivered
    Suppressed,
    /// Delivery attempted and failed; the failure is not escalated
    Failed(PollError),
}

/// Delivers an alert only when its text differs from the previous alert
///
/// Deduplication is by exact message text for the lifetime of the instance.
/// The last message is recorded whether or not its delivery succeeded.
#[derive(Debug, Default)]
pub struct AlertDeduper {
    last_error_message: Option<String>,
}

impl AlertDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent alert seen
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    pub async fn alert(&mut self, event: AlertEvent, notifier: &dyn Notifier) -> AlertDisposition {
        debug!(message = %event.message, "AlertDeduper::alert: called");
        if self.last_error_message.as_deref() == Some(event.message.as_str()) {
            debug!("AlertDeduper::alert: duplicate, suppressed");
            return AlertDisposition::Suppressed;
        }

        let disposition = match notifier.send(&event.message).await {
            Ok(()) => AlertDisposition::Delivered,
            Err(e) => {
                warn!(error = %e, "Failed to deliver alert");
                AlertDisposition::Failed(e)
            }
        };
        self.last_error_message = Some(event.message);
        disposition
    }
}
