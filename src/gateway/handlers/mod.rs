//! HTTP handlers
//!
//! - [`account`]: create and fetch accounts
//! - [`transfer`]: move money between accounts
//! - [`health`]: liveness

pub mod account;
pub mod health;
pub mod transfer;

pub use account::{create_account, get_account};
pub use health::{HealthResponse, health_check};
pub use transfer::transfer_money;

