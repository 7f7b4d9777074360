//! Data carried between the status API and the poll loop

use serde_json::Value;
use tracing::debug;

use crate::status::HomeworkStatus;

/// Timestamp watermark sent to the API as `from_date`
///
/// Empty means "from the beginning"; the first request then substitutes the
/// current wall-clock time. The cursor never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollCursor(Option<i64>);

impl PollCursor {
    /// Create an empty cursor
    pub fn new() -> Self {
        Self(None)
    }

    /// Create a cursor positioned at the given timestamp
    pub fn at(timestamp: i64) -> Self {
        Self(Some(timestamp))
    }

    /// Current watermark, if any
    pub fn value(&self) -> Option<i64> {
        self.0
    }

    /// Value to send as `from_date`, falling back to `now` when empty
    pub fn from_date(&self, now: i64) -> i64 {
        self.0.unwrap_or(now)
    }

    /// Move the cursor to `timestamp` unless that would move it backwards
    ///
    /// Returns true when the stored value changed.
    pub fn advance(&mut self, timestamp: i64) -> bool {
        debug!(current = ?self.0, %timestamp, "PollCursor::advance: called");
        match self.0 {
            Some(current) if timestamp < current => {
                debug!("PollCursor::advance: refusing to move backwards");
                false
            }
            Some(current) if timestamp == current => false,
            _ => {
                self.0 = Some(timestamp);
                true
            }
        }
    }
}

/// Structurally valid API response
///
/// Records stay untyped until the formatter checks them, so a bad record is
/// reported as a data error rather than failing the whole response.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    /// Homework entries in server order
    pub homeworks: Vec<Value>,

    /// Server-reported time of this response, when present and integral
    pub current_date: Option<i64>,
}

impl StatusResponse {
    /// First record of the response; later records are not processed
    pub fn first(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Homework entry after its fields have been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_cursor_uses_now() {
        let cursor = PollCursor::new();
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.from_date(1234), 1234);
    }

    #[test]
    fn test_cursor_advances_forward_only() {
        let mut cursor = PollCursor::new();
        assert!(cursor.advance(1000));
        assert_eq!(cursor.from_date(0), 1000);

        assert!(!cursor.advance(1000));
        assert!(!cursor.advance(500));
        assert_eq!(cursor.value(), Some(1000));

        assert!(cursor.advance(2000));
        assert_eq!(cursor, PollCursor::at(2000));
    }

    #[test]
    fn test_first_record_only() {
        let response = StatusResponse {
            homeworks: vec![json!({"homework_name": "hw1"}), json!({"homework_name": "hw2"})],
            current_date: Some(1),
        };
        assert_eq!(response.first(), Some(&json!({"homework_name": "hw1"})));

        let empty = StatusResponse {
            homeworks: vec![],
            current_date: None,
        };
        assert!(empty.first().is_none());
    }
}
