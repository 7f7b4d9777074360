//! Chat notifications
//!
//! The [`Notifier`] trait is the single-method chat seam; [`AlertDeduper`]
//! sits in front of it for error alerts so a persistent failure is reported
//! once rather than every poll interval.

mod dedup;
mod notifier;
mod telegram;

pub use dedup::{AlertDeduper, AlertDisposition, AlertEvent};
#[cfg(test)]
pub use notifier::mock;
pub use notifier::Notifier;
pub use telegram::TelegramNotifier;
