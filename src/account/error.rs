//! Account registry errors

use thiserror::Error;

/// Errors raised by the account repository
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account id {account_id} already exists!")]
    DuplicateAccount { account_id: String },

    /// A thread panicked while holding this account's lock. Never recoverable.
    #[error("Account {account_id} lock poisoned")]
    LockPoisoned { account_id: String },
}
