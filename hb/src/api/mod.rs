//! Homework status API
//!
//! Fetches the raw status payload and checks its structure before any
//! record is interpreted.

mod client;
mod types;
mod validate;

#[cfg(test)]
pub use client::mock;
pub use client::{PracticumClient, StatusClient};
pub use types::{HomeworkRecord, PollCursor, StatusResponse};
pub use validate::validate;
