//! Transfer Error Types
//!
//! Business rejections carry the exact text returned to HTTP callers, so
//! `Display` output is part of the external contract.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Which end of a transfer an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    From,
    To,
}

impl fmt::Display for TransferSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferSide::From => f.write_str("from"),
            TransferSide::To => f.write_str("to"),
        }
    }
}

/// Transfer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    // === Business Rejections (reported in-band) ===
    #[error("Account {side} with id {account_id} not found!")]
    AccountNotFound {
        side: TransferSide,
        account_id: String,
    },

    #[error(
        "The amount {amount} is lower than the current balance in the from account which has {current_balance}"
    )]
    InsufficientFunds {
        amount: Decimal,
        current_balance: Decimal,
    },

    #[error("The amount {amount} must be greater than zero")]
    InvalidAmount { amount: Decimal },

    /// Applying the amount would overflow or round the balance
    #[error("The amount {amount} cannot be applied exactly to the {side} account with id {account_id}")]
    BalanceOutOfRange {
        side: TransferSide,
        account_id: String,
        amount: Decimal,
    },

    // === System Errors ===
    #[error("Account {account_id} lock poisoned")]
    LockPoisoned { account_id: String },
}

impl TransferError {
    /// Business rejections are data for the caller; everything else is fatal.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TransferError::LockPoisoned { .. })
    }
}
