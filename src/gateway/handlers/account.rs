//! Account handlers (create, fetch)

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::account::CreateAccountRequest;

use super::super::state::AppState;
use super::super::types::{AccountResponseData, ApiError};

/// Create account
///
/// POST /v1/accounts
///
/// The body is parsed by hand so that every malformed input (no body,
/// bad JSON, missing fields) is a 400 with a readable message.
#[utoipa::path(
    post,
    path = "/v1/accounts",
    request_body(content = CreateAccountRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid body or duplicate account id")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let req: CreateAccountRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))?;

    let account = req.validate().map_err(|errors| ApiError::validation(&errors))?;

    state.accounts_service.create_account(account)?;
    Ok(StatusCode::CREATED)
}

/// Get account
///
/// GET /v1/accounts/{account_id}
#[utoipa::path(
    get,
    path = "/v1/accounts/{account_id}",
    params(
        ("account_id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account state", body = AccountResponseData, content_type = "application/json"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponseData>, ApiError> {
    tracing::debug!(account_id = %account_id, "Retrieving account");

    match state.accounts_service.get_account(&account_id)? {
        Some(account) => Ok(Json(account.into())),
        None => ApiError::not_found(format!("Account {account_id} not found")).into_err(),
    }
}
