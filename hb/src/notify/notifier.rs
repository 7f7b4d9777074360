//! Notifier trait definition

use async_trait::async_trait;

use crate::error::PollError;

/// Delivers text to the configured chat
///
/// Implementations never retry; a failed delivery is reported as
/// [`PollError::DeliveryFailed`].
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), PollError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tracing::debug;

    /// Mock notifier recording every delivery attempt
    #[derive(Default)]
    pub struct MockNotifier {
        sent: Mutex<Vec<String>>,
        failing: AtomicBool,
    }

    impl MockNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// Notifier whose every delivery fails
        pub fn failing() -> Self {
            let notifier = Self::default();
            notifier.set_failing(true);
            notifier
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// Texts passed to `send`, including failed attempts
        pub fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn send(&self, text: &str) -> Result<(), PollError> {
            debug!(%text, "MockNotifier::send: called");
            self.sent.lock().unwrap().push(text.to_string());
            if self.failing.load(Ordering::SeqCst) {
                return Err(PollError::DeliveryFailed("chat not found".to_string()));
            }
            Ok(())
        }
    }
}
