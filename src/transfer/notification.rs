//! Account-changed notifications
//!
//! The ledger tells account owners about balance changes through this seam.
//! Delivery is best-effort: a failed notification never undoes a transfer.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Receives one call per changed account after a transfer commits.
pub trait AccountNotifier: Send + Sync {
    /// Get notifier name for logging
    fn name(&self) -> &'static str;

    fn notify_balance_changed(
        &self,
        account_id: &str,
        new_balance: Decimal,
    ) -> Result<(), NotificationError>;
}

/// Default notifier: writes the change to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl AccountNotifier for LoggingNotifier {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn notify_balance_changed(
        &self,
        account_id: &str,
        new_balance: Decimal,
    ) -> Result<(), NotificationError> {
        tracing::info!(account_id, %new_balance, "Account balance changed");
        Ok(())
    }
}

/// Mock notifier for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    pub struct MockNotifier {
        /// (account_id, new_balance) in call order
        calls: Mutex<Vec<(String, Decimal)>>,
        fail: AtomicBool,
    }

    impl MockNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_fail(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        pub fn calls(&self) -> Vec<(String, Decimal)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AccountNotifier for MockNotifier {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn notify_balance_changed(
            &self,
            account_id: &str,
            new_balance: Decimal,
        ) -> Result<(), NotificationError> {
            self.calls
                .lock()
                .unwrap()
                .push((account_id.to_string(), new_balance));
            if self.fail.load(Ordering::SeqCst) {
                return Err(NotificationError::Delivery("mock failure".to_string()));
            }
            Ok(())
        }
    }
}
