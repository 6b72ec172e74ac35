use std::sync::Arc;

use crate::account::AccountRepository;
use crate::transfer::{AccountNotifier, AccountsService};

/// Gateway application state (shared across handlers)
#[derive(Clone)]
pub struct AppState {
    /// Ledger service; owns the repository
    pub accounts_service: Arc<AccountsService>,
}

impl AppState {
    pub fn new(accounts_service: Arc<AccountsService>) -> Self {
        Self { accounts_service }
    }

    /// Fresh, empty ledger wired to the given notifier
    pub fn with_notifier(notifier: Arc<dyn AccountNotifier>) -> Self {
        let repository = Arc::new(AccountRepository::new());
        Self::new(Arc::new(AccountsService::new(repository, notifier)))
    }
}
