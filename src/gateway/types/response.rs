//! API Response types and error codes
//!
//! - `ApiResponse<T>`: Unified response wrapper
//! - `ApiError`: Handler error that renders as `ApiResponse`
//! - `error_codes`: Standard error code constants
//! - Various response DTOs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::{Account, AccountError, ValidationError};

use super::money::serialize_decimal_number;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: payload on success, error details on validation failure
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Handler result carrying the unified wrapper
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap data in a success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

// ============================================================================
// ApiError
// ============================================================================

/// Error returned by handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
    /// One entry per validation problem (empty for other errors)
    pub details: Vec<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
            details: Vec::new(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::ACCOUNT_NOT_FOUND, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    /// 400 listing every validation failure
    pub fn validation(errors: &[ValidationError]) -> Self {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Self {
            status: StatusCode::BAD_REQUEST,
            code: error_codes::INVALID_PARAMETER,
            msg: details.join("; "),
            details,
        }
    }

    pub fn into_err<T>(self) -> Result<T, ApiError> {
        Err(self)
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::DuplicateAccount { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::DUPLICATE_ACCOUNT,
                e.to_string(),
            ),
            AccountError::LockPoisoned { .. } => {
                tracing::error!(error = %e, "Account store failure");
                Self::internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.details.is_empty() {
            (self.status, Json(ApiResponse::<()>::error(self.code, self.msg))).into_response()
        } else {
            let body = ApiResponse {
                code: self.code,
                msg: self.msg,
                data: Some(self.details),
            };
            (self.status, Json(body)).into_response()
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Account state as returned by `GET /v1/accounts/{account_id}`
///
/// Serialized bare (not wrapped), with the balance as a JSON number that
/// keeps the stored scale.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponseData {
    #[schema(example = "Id-123")]
    pub account_id: String,
    #[serde(serialize_with = "serialize_decimal_number")]
    #[schema(value_type = f64, example = 123.45)]
    pub balance: Decimal,
}

impl From<Account> for AccountResponseData {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id().to_string(),
            balance: account.balance(),
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const DUPLICATE_ACCOUNT: i32 = 1004;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_account_response_json() {
        let data = AccountResponseData::from(Account::new(
            "Id-123",
            Decimal::from_str("123.45").unwrap(),
        ));
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"accountId":"Id-123","balance":123.45}"#
        );
    }

    #[test]
    fn test_account_response_keeps_scale() {
        let data = AccountResponseData {
            account_id: "Id-1".to_string(),
            balance: Decimal::from_str("120.00").unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"accountId":"Id-1","balance":120.00}"#
        );
    }

    #[test]
    fn test_success_wrapper() {
        let json = serde_json::to_string(&ApiResponse::success(7)).unwrap();
        assert_eq!(json, r#"{"code":0,"msg":"ok","data":7}"#);
    }

    #[test]
    fn test_error_wrapper_omits_data() {
        let json = serde_json::to_string(&ApiResponse::<()>::error(1001, "bad")).unwrap();
        assert_eq!(json, r#"{"code":1001,"msg":"bad"}"#);
    }

    #[test]
    fn test_duplicate_maps_to_bad_request() {
        let err = ApiError::from(AccountError::DuplicateAccount {
            account_id: "Id-1".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, error_codes::DUPLICATE_ACCOUNT);
        assert_eq!(err.msg, "Account id Id-1 already exists!");
    }

    #[test]
    fn test_validation_lists_each_problem() {
        let err = ApiError::validation(&[
            ValidationError::MissingField { field: "accountId" },
            ValidationError::MissingField { field: "balance" },
        ]);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.details.len(), 2);
        assert_eq!(
            err.msg,
            "Missing required field: accountId; Missing required field: balance"
        );
    }
}
