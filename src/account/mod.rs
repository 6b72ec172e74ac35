//! Account management module
//!
//! In-memory storage and input validation for balance-holding accounts.

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use error::AccountError;
pub use models::{Account, AccountId};
pub use repository::AccountRepository;
pub use validation::{CreateAccountRequest, ValidationError, parse_decimal};
