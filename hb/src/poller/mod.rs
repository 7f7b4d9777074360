//! Poll-evaluate-notify loop
//!
//! The [`Poller`] queries the status API on a fixed interval, turns the
//! newest homework status into a chat message and routes every recoverable
//! failure through the alert deduper.

mod config;
mod poll_loop;

pub use config::PollerConfig;
pub use poll_loop::{CycleOutcome, Poller};
