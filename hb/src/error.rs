//! Error types for the homework poller

use thiserror::Error;

/// Recoverable failures raised during a single poll cycle
///
/// The `Display` text of each variant is the operator-facing alert text.
/// Alert deduplication compares exactly this text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("Endpoint unavailable. API response code: {0}")]
    EndpointUnavailable(u16),

    #[error("Endpoint request failed: {0}")]
    Transport(String),

    #[error("Invalid API response: {0}")]
    MalformedResponse(String),

    #[error("Missing key in API response: {0}")]
    MissingField(String),

    #[error("Undocumented homework status: {0}")]
    UnknownStatus(String),

    #[error("Failed to send message to Telegram: {0}")]
    DeliveryFailed(String),

    #[error("Program failure: {0}")]
    Unexpected(String),
}

impl PollError {
    /// Check if this error comes from the shape or content of the API payload
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            PollError::MalformedResponse(_) | PollError::MissingField(_) | PollError::UnknownStatus(_)
        )
    }

    /// Check if this error means the status endpoint could not be reached
    pub fn is_endpoint_error(&self) -> bool {
        matches!(self, PollError::EndpointUnavailable(_) | PollError::Transport(_))
    }

    /// Short failure category for structured logs
    pub fn kind(&self) -> &'static str {
        if self.is_data_error() {
            "data"
        } else if self.is_endpoint_error() {
            "endpoint"
        } else if matches!(self, PollError::DeliveryFailed(_)) {
            "delivery"
        } else {
            "unexpected"
        }
    }
}

/// Render an error followed by its `source()` chain, joined by ": "
///
/// Segments repeating the text of the previous one are skipped.
pub fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut previous = text.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let segment = cause.to_string();
        if !segment.is_empty() && !previous.contains(&segment) {
            text.push_str(": ");
            text.push_str(&segment);
        }
        previous = segment;
        source = cause.source();
    }
    text
}

/// Failures that abort the process before polling starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("Required credential {0} is missing")]
    MissingCredential(String),
}
