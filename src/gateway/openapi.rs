//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::CreateAccountRequest;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::AccountResponseData;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts Ledger API",
        version = "1.0.0",
        description = "In-memory account ledger: create accounts, read balances, transfer funds atomically.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::transfer::transfer_money,
    ),
    components(
        schemas(
            HealthResponse,
            CreateAccountRequest,
            AccountResponseData,
        )
    ),
    tags(
        (name = "Account", description = "Account creation and queries"),
        (name = "Transfer", description = "Fund transfers between accounts"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
