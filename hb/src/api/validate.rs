//! Structural checks on the decoded API body

use serde_json::Value;
use tracing::{debug, warn};

use super::types::StatusResponse;
use crate::error::PollError;

/// Check the shape of a decoded response and extract its homework list
///
/// Checks run in order: the body must be a mapping, it must contain
/// `homeworks`, and `homeworks` must be a sequence. The list may be empty.
pub fn validate(raw: Value) -> Result<StatusResponse, PollError> {
    debug!("validate: called");
    let Value::Object(mut body) = raw else {
        return Err(PollError::MalformedResponse("not a mapping".to_string()));
    };

    let current_date = match body.get("current_date") {
        Some(value) => {
            let date = value.as_i64();
            if date.is_none() {
                warn!(current_date = %value, "validate: current_date is not an integer");
            }
            date
        }
        None => {
            warn!("validate: response has no current_date");
            None
        }
    };

    let Some(homeworks) = body.remove("homeworks") else {
        return Err(PollError::MalformedResponse("missing homeworks key".to_string()));
    };

    let Value::Array(homeworks) = homeworks else {
        return Err(PollError::MalformedResponse("homeworks not a sequence".to_string()));
    };

    debug!(count = homeworks.len(), ?current_date, "validate: response accepted");
    Ok(StatusResponse { homeworks, current_date })
}
