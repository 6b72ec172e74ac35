//! Input validation for account creation
//!
//! `CreateAccountRequest` is the raw HTTP body. Every field is optional at the
//! serde layer so a missing field becomes a validation error instead of an
//! opaque parse failure, and `validate()` reports all problems at once.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::value::RawValue;
use utoipa::ToSchema;

use super::models::Account;

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for account creation input
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid decimal for {field}: '{value}'")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Initial balance must be positive.")]
    NegativeBalance { value: Decimal },
}

// ============================================================================
// CreateAccountRequest
// ============================================================================

/// Create account request body
///
/// `balance` is kept as raw JSON text so the decimal is parsed exactly as
/// written; a JSON number is never routed through `f64`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Unique account identifier
    #[schema(example = "Id-123")]
    pub account_id: Option<String>,
    /// Opening balance (JSON number or decimal string)
    #[schema(value_type = f64, example = 1000)]
    pub balance: Option<Box<RawValue>>,
}

impl CreateAccountRequest {
    /// Validate the request and build the account it describes.
    ///
    /// # Errors
    /// Every `ValidationError` found, in field order.
    pub fn validate(&self) -> Result<Account, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let account_id = match self.account_id.as_deref() {
            None => {
                errors.push(ValidationError::MissingField { field: "accountId" });
                None
            }
            Some(id) if id.trim().is_empty() => {
                errors.push(ValidationError::EmptyField { field: "accountId" });
                None
            }
            Some(id) => Some(id),
        };

        let balance = match self.balance.as_deref() {
            None => {
                errors.push(ValidationError::MissingField { field: "balance" });
                None
            }
            Some(raw) => match parse_json_decimal(raw) {
                Some(value) if value.is_sign_negative() && !value.is_zero() => {
                    errors.push(ValidationError::NegativeBalance { value });
                    None
                }
                Some(value) => Some(value),
                None => {
                    errors.push(ValidationError::InvalidDecimal {
                        field: "balance",
                        value: raw.get().to_string(),
                    });
                    None
                }
            },
        };

        match (account_id, balance) {
            (Some(id), Some(balance)) if errors.is_empty() => Ok(Account::new(id, balance)),
            _ => Err(errors),
        }
    }
}

/// Parse a raw JSON value holding a number or a decimal string.
///
/// Returns `None` for anything else (`null`, booleans, objects, bad text).
fn parse_json_decimal(raw: &RawValue) -> Option<Decimal> {
    let text = raw.get().trim();
    if text.starts_with('"') {
        let inner: String = serde_json::from_str(text).ok()?;
        return parse_decimal(&inner);
    }
    parse_decimal(text)
}

/// Parse a plain or scientific decimal literal.
///
/// Rejects `.5` and `5.` like the gateway's amount parser. Input that
/// `Decimal` cannot hold digit for digit (more than 28 fractional digits,
/// more than 96 bits of mantissa) is rejected rather than rounded.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('.') || text.ends_with('.') {
        return None;
    }
    if text.contains(['e', 'E']) {
        return parse_scientific_exact(text);
    }
    Decimal::from_str_exact(text).ok()
}

/// `<mantissa>e<exponent>` applied by moving the scale, never by rounding.
fn parse_scientific_exact(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;

    let scale = i64::from(value.scale()) - exponent;
    if scale >= 0 {
        // Fails above the 28-digit maximum scale
        value.set_scale(u32::try_from(scale).ok()?).ok()?;
        return Some(value);
    }

    value.set_scale(0).ok()?;
    if value.is_zero() {
        return Some(value);
    }
    if -scale > 28 {
        return None;
    }
    (0..-scale).try_fold(value, |acc, _| acc.checked_mul(Decimal::TEN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> CreateAccountRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let account = request(r#"{"accountId":"Id-123","balance":1000}"#)
            .validate()
            .unwrap();
        assert_eq!(account.account_id(), "Id-123");
        assert_eq!(account.balance(), Decimal::from(1000));
    }

    #[test]
    fn test_balance_keeps_exact_scale() {
        let account = request(r#"{"accountId":"Id-1","balance":123.45}"#)
            .validate()
            .unwrap();
        assert_eq!(account.balance().to_string(), "123.45");
    }

    #[test]
    fn test_balance_as_string() {
        let account = request(r#"{"accountId":"Id-1","balance":"0.10"}"#)
            .validate()
            .unwrap();
        assert_eq!(account.balance().to_string(), "0.10");
    }

    #[test]
    fn test_zero_balance_allowed() {
        assert!(
            request(r#"{"accountId":"Id-1","balance":0}"#)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_missing_account_id() {
        let errors = request(r#"{"balance":1000}"#).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MissingField { field: "accountId" }]
        );
    }

    #[test]
    fn test_missing_balance() {
        let errors = request(r#"{"accountId":"Id-123"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingField { field: "balance" }]);
    }

    #[test]
    fn test_null_balance_is_missing() {
        let errors = request(r#"{"accountId":"Id-123","balance":null}"#)
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingField { field: "balance" }]);
    }

    #[test]
    fn test_negative_balance() {
        let errors = request(r#"{"accountId":"Id-123","balance":-1000}"#)
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::NegativeBalance { .. }));
        assert_eq!(errors[0].to_string(), "Initial balance must be positive.");
    }

    #[test]
    fn test_empty_account_id() {
        let errors = request(r#"{"accountId":"","balance":1000}"#)
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyField { field: "accountId" }]);
    }

    #[test]
    fn test_all_errors_reported() {
        let errors = request(r#"{"accountId":"","balance":true}"#)
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[1],
            ValidationError::InvalidDecimal { field: "balance", .. }
        ));
    }

    #[test]
    fn test_parse_decimal_formats() {
        assert_eq!(parse_decimal("3.45").unwrap().to_string(), "3.45");
        assert_eq!(parse_decimal("1e3").unwrap(), Decimal::from(1000));
        assert!(parse_decimal(".5").is_none());
        assert!(parse_decimal("5.").is_none());
        assert!(parse_decimal("abc").is_none());
        assert!(parse_decimal("").is_none());
    }

    #[test]
    fn test_parse_decimal_scientific_is_exact() {
        assert_eq!(parse_decimal("1.5E-2").unwrap().to_string(), "0.015");
        assert_eq!(parse_decimal("1.5e2").unwrap().to_string(), "150");
        assert_eq!(parse_decimal("2e+1").unwrap(), Decimal::from(20));
        assert_eq!(parse_decimal("0e40").unwrap(), Decimal::ZERO);
        assert!(parse_decimal("1e-29").is_none());
        assert!(parse_decimal("1e29").is_none());
        assert!(parse_decimal("e3").is_none());
        assert!(parse_decimal("1e").is_none());
    }

    #[test]
    fn test_parse_decimal_rejects_rounding() {
        // 29 fractional digits would round to zero
        assert!(parse_decimal("0.00000000000000000000000000001").is_none());
        // 32 significant digits would round to 1.0000000000000000000000000000
        assert!(parse_decimal("1.0000000000000000000000000000001").is_none());
        // Largest mantissa still parses
        assert_eq!(
            parse_decimal("79228162514264337593543950335").unwrap(),
            Decimal::MAX
        );
        assert_eq!(
            parse_decimal("0.0000000000000000000000000001").unwrap().scale(),
            28
        );
    }

    #[test]
    fn test_unrepresentable_balance_is_invalid() {
        let errors = request(r#"{"accountId":"Id-1","balance":1.0000000000000000000000000000001}"#)
            .validate()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidDecimal {
                field: "balance",
                value: "1.0000000000000000000000000000001".to_string()
            }]
        );
    }
}
