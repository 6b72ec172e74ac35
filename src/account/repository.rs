//! In-memory account repository
//!
//! The repository is the single owner of the `account_id -> Account` mapping.
//! Each account sits behind its own `Mutex` so transfers can lock exactly the
//! two accounts they touch; the map itself is a sharded `DashMap`, which makes
//! insert-if-absent atomic per key.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::error::AccountError;
use super::models::{Account, AccountId};

/// Shared handle to one account's lock
pub(crate) type AccountHandle = Arc<Mutex<Account>>;

/// Thread-safe in-memory account store.
pub struct AccountRepository {
    accounts: DashMap<AccountId, AccountHandle>,
}

impl AccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Insert a new account.
    ///
    /// # Errors
    /// `DuplicateAccount` if the id is already present. The stored account is
    /// left untouched in that case.
    pub fn create_account(&self, account: Account) -> Result<(), AccountError> {
        // Entry holds the shard write lock, so check-and-insert is one step
        match self.accounts.entry(account.account_id().to_string()) {
            Entry::Occupied(entry) => Err(AccountError::DuplicateAccount {
                account_id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(account)));
                Ok(())
            }
        }
    }

    /// Snapshot of an account, or `None` if unknown.
    ///
    /// # Errors
    /// `LockPoisoned` if a writer panicked while holding the account lock.
    pub fn get_account(&self, account_id: &str) -> Result<Option<Account>, AccountError> {
        let Some(handle) = self.handle(account_id) else {
            return Ok(None);
        };
        let account = handle.lock().map_err(|_| AccountError::LockPoisoned {
            account_id: account_id.to_string(),
        })?;
        Ok(Some(account.clone()))
    }

    /// Remove every account. Test isolation only.
    pub fn clear_accounts(&self) {
        self.accounts.clear();
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True when no account is registered
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Clone the lock handle out of the map.
    ///
    /// The map guard is released before returning, so callers can block on
    /// the account lock without holding a shard lock.
    pub(crate) fn handle(&self, account_id: &str) -> Option<AccountHandle> {
        self.accounts
            .get(account_id)
            .map(|entry| Arc::clone(entry.value()))
    }
}

impl Default for AccountRepository {
    fn default() -> Self {
        Self::new()
    }
}
