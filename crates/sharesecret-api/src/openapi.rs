//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into one OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "sharesecret",
        description = "Burn-after-read secret sharing: submit a secret, reveal it exactly once."
    ),
    paths(
        crate::routes::secrets::create_secret,
        crate::routes::secrets::reveal_secret,
        crate::routes::secrets::missing_id,
        crate::healthcheck,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::secrets::CreateSecretRequest,
        crate::routes::secrets::CreateSecretResponse,
        crate::routes::secrets::SecretResponse,
        crate::HealthResponse,
    )),
    tags(
        (name = "secrets", description = "Submit and reveal secrets"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
