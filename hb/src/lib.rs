//! HomeworkBot - homework review status notifier
//!
//! Periodically asks the homework status API what changed since the last
//! successful poll, turns the newest review status into a short message and
//! delivers it to a single Telegram chat. Failures are reported to the same
//! chat, at most once per distinct error text.
//!
//! # Modules
//!
//! - [`api`] - status API client and response validation
//! - [`status`] - status codes and verdict messages
//! - [`notify`] - chat delivery and alert deduplication
//! - [`poller`] - the poll-evaluate-notify loop
//! - [`config`] - configuration and credential loading
//! - [`cli`] - command-line interface

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod poller;
pub mod status;

#[cfg(test)]
mod test_support;

pub use api::{HomeworkRecord, PollCursor, PracticumClient, StatusClient, StatusResponse, validate};
pub use config::{ApiConfig, Config, Credentials, TelegramConfig};
pub use error::{PollError, StartupError};
pub use notify::{AlertDeduper, AlertDisposition, AlertEvent, Notifier, TelegramNotifier};
pub use poller::{CycleOutcome, Poller, PollerConfig};
pub use status::{HomeworkStatus, format};

/// Exit status for a configuration error (sysexits `EX_CONFIG`)
pub const EXIT_CONFIG: i32 = 78;
