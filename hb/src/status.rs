//! Homework statuses and their verdict messages

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, info};

use crate::api::HomeworkRecord;
use crate::error::PollError;

/// Review status codes the API is documented to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Wire code of this status
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken for review by the reviewer.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has comments.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| PollError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl HomeworkRecord {
    /// Check an untyped record and extract its name and status
    pub fn from_value(raw: &Value) -> Result<Self, PollError> {
        let Some(fields) = raw.as_object() else {
            return Err(PollError::MalformedResponse("homework is not a mapping".to_string()));
        };

        let homework_name = required_field(fields, "homework_name")?;
        let status = required_field(fields, "status")?;

        Ok(Self {
            homework_name: text_of(homework_name),
            status: text_of(status).parse()?,
        })
    }
}

fn required_field<'a>(fields: &'a serde_json::Map<String, Value>, name: &str) -> Result<&'a Value, PollError> {
    fields
        .get(name)
        .ok_or_else(|| PollError::MissingField(name.to_string()))
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the notification text for one homework record
pub fn format(raw: &Value) -> Result<String, PollError> {
    debug!("format: called");
    let record = HomeworkRecord::from_value(raw)?;
    info!(homework = %record.homework_name, status = %record.status, "Homework status changed");
    Ok(format!(
        "Changed review status of \"{}\". {}",
        record.homework_name,
        record.status.verdict()
    ))
}
