//! Transfer handler
//!
//! Business rejections are returned in-band: status 200 with the rejection
//! text as a plain-text body. Only malformed amounts (400) and store
//! failures (500) use error statuses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::state::AppState;
use super::super::types::{ApiError, parse_path_amount};

/// Transfer money between two accounts
///
/// PUT /v1/accounts/{account_from_id}/{account_to_id}/{amount}
#[utoipa::path(
    put,
    path = "/v1/accounts/{account_from_id}/{account_to_id}/{amount}",
    params(
        ("account_from_id" = String, Path, description = "Debited account ID"),
        ("account_to_id" = String, Path, description = "Credited account ID"),
        ("amount" = String, Path, description = "Decimal amount, e.g. 3.45")
    ),
    responses(
        (status = 200, description = "Empty body on success, rejection message otherwise", content_type = "text/plain"),
        (status = 400, description = "Amount is not a decimal"),
        (status = 500, description = "Account store failure")
    ),
    tag = "Transfer"
)]
pub async fn transfer_money(
    State(state): State<Arc<AppState>>,
    Path((account_from_id, account_to_id, amount)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    let amount = parse_path_amount(&amount)?;

    match state
        .accounts_service
        .transfer(&account_from_id, &account_to_id, amount)
    {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(e) if e.is_rejection() => Ok((StatusCode::OK, e.to_string()).into_response()),
        Err(e) => ApiError::internal(e.to_string()).into_err(),
    }
}
