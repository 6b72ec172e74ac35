//! Balance transfers between accounts
//!
//! - [`service`]: `AccountsService`, the locking transfer algorithm
//! - [`error`]: rejection taxonomy with the literal caller-facing messages
//! - [`notification`]: best-effort account-changed notifications

pub mod error;
pub mod notification;
pub mod service;

pub use error::{TransferError, TransferSide};
pub use notification::{AccountNotifier, LoggingNotifier, NotificationError};
pub use service::AccountsService;
