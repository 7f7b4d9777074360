//! Poller implementation

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use super::config::PollerConfig;
use crate::api::{PollCursor, StatusClient, validate};
use crate::error::PollError;
use crate::notify::{AlertDeduper, AlertDisposition, AlertEvent, Notifier};
use crate::status;

/// Result of one poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was delivered to the chat
    Notified { message: String },
    /// The API reported no changed homework
    NoUpdates,
    /// A recoverable failure; the cursor was left untouched
    Failed { error: PollError, alert: AlertDisposition },
}

/// Owns the cursor and the alert state for one tracked account
pub struct Poller {
    config: PollerConfig,
    client: Arc<dyn StatusClient>,
    notifier: Arc<dyn Notifier>,
    cursor: PollCursor,
    deduper: AlertDeduper,
}

impl Poller {
    /// Create a Poller starting from an empty cursor
    pub fn new(config: PollerConfig, client: Arc<dyn StatusClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            client,
            notifier,
            cursor: PollCursor::new(),
            deduper: AlertDeduper::new(),
        }
    }

    /// Start from a known cursor instead of an empty one
    pub fn with_cursor(mut self, cursor: PollCursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// Current cursor
    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    /// Alert state, for inspection
    pub fn deduper(&self) -> &AlertDeduper {
        &self.deduper
    }

    /// Fetch, evaluate and notify; the cursor moves only on success
    async fn poll_once(&mut self) -> Result<Option<String>, PollError> {
        debug!(cursor = ?self.cursor, "Poller::poll_once: called");
        let raw = self.client.fetch(self.cursor).await?;
        let response = validate(raw)?;

        let Some(record) = response.first() else {
            info!("No updates found");
            self.advance_cursor(response.current_date);
            return Ok(None);
        };

        if response.homeworks.len() > 1 {
            debug!(
                skipped = response.homeworks.len() - 1,
                "Poller::poll_once: only the first record is processed"
            );
        }

        let message = status::format(record)?;
        self.notifier.send(&message).await?;
        info!("Message sent to Telegram");

        self.advance_cursor(response.current_date);
        Ok(Some(message))
    }

    fn advance_cursor(&mut self, current_date: Option<i64>) {
        match current_date {
            Some(date) => {
                if !self.cursor.advance(date) && self.cursor.value() != Some(date) {
                    warn!(cursor = ?self.cursor.value(), %date, "Server date is older than cursor, keeping cursor");
                }
            }
            None => warn!("Response carried no usable current_date, keeping cursor"),
        }
    }

    /// Run a single cycle without sleeping
    ///
    /// Never fails: every error, including a panic inside a collaborator,
    /// is logged and routed through the alert deduper.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        debug!("Poller::run_cycle: called");
        let result = match AssertUnwindSafe(self.poll_once()).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(PollError::Unexpected(panic_message(panic.as_ref()))),
        };

        match result {
            Ok(Some(message)) => CycleOutcome::Notified { message },
            Ok(None) => CycleOutcome::NoUpdates,
            Err(error) => {
                error!(kind = error.kind(), "{}", error);
                let alert = self
                    .deduper
                    .alert(AlertEvent::from(&error), self.notifier.as_ref())
                    .await;
                debug!(?alert, "Poller::run_cycle: alert handled");
                CycleOutcome::Failed { error, alert }
            }
        }
    }

    /// Run the poll loop
    ///
    /// Sleeps for the retry interval after every cycle regardless of its
    /// outcome. Runs until the process is stopped.
    pub async fn run(mut self) {
        info!(interval_secs = self.config.retry_interval_secs, "Poller started");

        loop {
            let outcome = self.run_cycle().await;
            debug!(?outcome, cursor = ?self.cursor, "Poller::run: cycle finished");

            tokio::time::sleep(self.config.retry_interval()).await;
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
