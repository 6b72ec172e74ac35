//! Gateway types module
//!
//! ## Submodules
//! - [`money`]: decimal parsing and number-preserving serialization
//! - [`response`]: response wrapper, `ApiError` and error codes

pub mod money;
pub mod response;

// Re-export commonly used types at module root
pub use money::{parse_path_amount, serialize_decimal_number};
pub use response::{AccountResponseData, ApiError, ApiResponse, ApiResult, error_codes, ok};
