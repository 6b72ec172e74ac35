//! Decimal handling at the API boundary
//!
//! Amounts enter as text (path segments, raw JSON) and leave as JSON numbers
//! written from the decimal's own digits, so neither direction goes through
//! `f64`.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::account::parse_decimal;

use super::response::ApiError;

/// Serialize a `Decimal` as a bare JSON number with its stored scale.
///
/// `120.00` stays `120.00`, `1000` stays `1000`.
pub fn serialize_decimal_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw = RawValue::from_string(value.to_string()).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

/// Parse a transfer amount taken from the URL path.
///
/// Only the format is checked here; sign and funds are business rules
/// handled by the transfer service.
pub fn parse_path_amount(text: &str) -> Result<Decimal, ApiError> {
    parse_decimal(text).ok_or_else(|| ApiError::bad_request(format!("Invalid amount: '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_amount() {
        assert_eq!(parse_path_amount("3.45").unwrap().to_string(), "3.45");
        assert_eq!(parse_path_amount("123.46").unwrap().to_string(), "123.46");
        // Sign is a business concern, not a format error
        assert!(parse_path_amount("-1").is_ok());
    }

    #[test]
    fn test_parse_path_amount_rejects_garbage() {
        let err = parse_path_amount("abc").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.msg, "Invalid amount: 'abc'");
        assert!(parse_path_amount(".5").is_err());
    }

    #[test]
    fn test_serialize_integer_balance() {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_decimal_number")]
            v: Decimal,
        }
        let json = serde_json::to_string(&Wrapper {
            v: Decimal::from(1000),
        })
        .unwrap();
        assert_eq!(json, r#"{"v":1000}"#);
    }
}
