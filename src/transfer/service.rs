//! Accounts service
//!
//! Wraps the repository and owns the transfer algorithm:
//!
//! ```text
//! lookup(from) ─▶ lookup(to) ─▶ amount > 0 ─▶ lock both (id order)
//!                                                   │
//!                       notify ◀── unlock ◀── debit/credit ◀── funds check
//! ```
//!
//! Both account locks are taken in ascending id order, so two transfers
//! moving money in opposite directions between the same pair cannot
//! deadlock. Funds are checked under the locks, never before.

use std::sync::{Arc, MutexGuard};

use rust_decimal::Decimal;

use crate::account::repository::AccountHandle;
use crate::account::{Account, AccountError, AccountRepository};

use super::error::{TransferError, TransferSide};
use super::notification::AccountNotifier;

pub struct AccountsService {
    repository: Arc<AccountRepository>,
    notifier: Arc<dyn AccountNotifier>,
}

impl AccountsService {
    /// Service over `repository`, reporting balance changes to `notifier`
    pub fn new(repository: Arc<AccountRepository>, notifier: Arc<dyn AccountNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Underlying repository (tests use it to reset state)
    pub fn accounts_repository(&self) -> &Arc<AccountRepository> {
        &self.repository
    }

    /// Register a new account (duplicates are rejected)
    pub fn create_account(&self, account: Account) -> Result<(), AccountError> {
        let account_id = account.account_id().to_string();
        self.repository
            .create_account(account)
            .inspect(|_| tracing::info!(account_id = %account_id, "Account created"))
            .inspect_err(|e| tracing::warn!(account_id = %account_id, error = %e, "Account creation rejected"))
    }

    /// Snapshot of an account, `None` if unknown
    pub fn get_account(&self, account_id: &str) -> Result<Option<Account>, AccountError> {
        self.repository.get_account(account_id)
    }

    /// Move `amount` from `from_id` to `to_id` atomically.
    ///
    /// # Errors
    /// - `AccountNotFound` (from checked before to)
    /// - `InvalidAmount` for zero or negative amounts
    /// - `InsufficientFunds` when `amount` exceeds the from balance
    /// - `BalanceOutOfRange` when either new balance would overflow or round
    /// - `LockPoisoned` if an account lock is unusable (fatal)
    pub fn transfer(&self, from_id: &str, to_id: &str, amount: Decimal) -> Result<(), TransferError> {
        let changed = self
            .execute_transfer(from_id, to_id, amount)
            .inspect_err(|e| {
                if e.is_rejection() {
                    tracing::warn!(from = from_id, to = to_id, %amount, error = %e, "Transfer rejected");
                } else {
                    tracing::error!(from = from_id, to = to_id, %amount, error = %e, "Transfer failed");
                }
            })?;

        tracing::info!(from = from_id, to = to_id, %amount, "Transfer applied");

        // Locks are already released here
        for (account_id, new_balance) in changed {
            if let Err(e) = self.notifier.notify_balance_changed(&account_id, new_balance) {
                tracing::warn!(
                    notifier = self.notifier.name(),
                    account_id = %account_id,
                    error = %e,
                    "Account notification failed"
                );
            }
        }
        Ok(())
    }

    /// Validate and apply the transfer; returns `(account_id, new_balance)`
    /// for every account that must be notified.
    fn execute_transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<Vec<(String, Decimal)>, TransferError> {
        let from = self
            .repository
            .handle(from_id)
            .ok_or_else(|| TransferError::AccountNotFound {
                side: TransferSide::From,
                account_id: from_id.to_string(),
            })?;
        let to = self
            .repository
            .handle(to_id)
            .ok_or_else(|| TransferError::AccountNotFound {
                side: TransferSide::To,
                account_id: to_id.to_string(),
            })?;

        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount { amount });
        }

        // Self-transfer: one lock, validate, net no-op
        if Arc::ptr_eq(&from, &to) {
            let account = lock(&from, from_id)?;
            check_funds(&account, amount)?;
            return Ok(vec![(from_id.to_string(), account.balance())]);
        }

        let (mut from_account, mut to_account) = if from_id < to_id {
            let from_account = lock(&from, from_id)?;
            let to_account = lock(&to, to_id)?;
            (from_account, to_account)
        } else {
            let to_account = lock(&to, to_id)?;
            let from_account = lock(&from, from_id)?;
            (from_account, to_account)
        };

        check_funds(&from_account, amount)?;

        // Both legs are computed before either is stored
        let new_from = from_account.balance_after_withdraw(amount).ok_or_else(|| {
            TransferError::BalanceOutOfRange {
                side: TransferSide::From,
                account_id: from_id.to_string(),
                amount,
            }
        })?;
        let new_to = to_account.balance_after_deposit(amount).ok_or_else(|| {
            TransferError::BalanceOutOfRange {
                side: TransferSide::To,
                account_id: to_id.to_string(),
                amount,
            }
        })?;

        from_account.commit_balance(new_from);
        to_account.commit_balance(new_to);

        Ok(vec![
            (from_id.to_string(), from_account.balance()),
            (to_id.to_string(), to_account.balance()),
        ])
    }
}

fn lock<'a>(
    handle: &'a AccountHandle,
    account_id: &str,
) -> Result<MutexGuard<'a, Account>, TransferError> {
    handle.lock().map_err(|_| TransferError::LockPoisoned {
        account_id: account_id.to_string(),
    })
}

/// Full balance is allowed; anything above is rejected.
fn check_funds(from: &Account, amount: Decimal) -> Result<(), TransferError> {
    if amount > from.balance() {
        return Err(TransferError::InsufficientFunds {
            amount,
            current_balance: from.balance(),
        });
    }
    Ok(())
}
