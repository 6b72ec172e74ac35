//! Accounts Ledger - in-memory bank accounts with atomic transfers
//!
//! # Modules
//!
//! - [`account`] - Account model, repository and input validation
//! - [`transfer`] - Transfer service, rejection taxonomy, notifications
//! - [`gateway`] - HTTP router, handlers and OpenAPI document
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountError, AccountRepository, CreateAccountRequest};
pub use config::AppConfig;
pub use transfer::{
    AccountNotifier, AccountsService, LoggingNotifier, TransferError, TransferSide,
};
