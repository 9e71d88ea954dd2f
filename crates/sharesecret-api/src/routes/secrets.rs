//! # Secrets API
//!
//! - `POST /` stores a secret and returns its digest.
//! - `GET /{id}` reveals a secret once; afterwards the digest is unknown.
//! - `GET /` without an id is rejected.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// Submit-secret request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSecretRequest {
    /// The secret to share. May be empty.
    pub plain_text: String,
}

/// Digest under which a submitted secret can be revealed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSecretResponse {
    pub id: String,
}

/// A revealed secret.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SecretResponse {
    pub data: String,
}

/// Build the secrets router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_secret).get(missing_id))
        .route("/{id}", get(reveal_secret))
}

/// POST / — Store a secret.
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateSecretRequest,
    responses(
        (status = 201, description = "Secret stored", body = CreateSecretResponse),
        (status = 400, description = "Malformed request", body = crate::error::ErrorBody),
        (status = 413, description = "Body too large", body = crate::error::ErrorBody),
    ),
    tag = "secrets"
)]
pub(crate) async fn create_secret(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateSecretRequest>,
) -> Result<(StatusCode, Json<CreateSecretResponse>), AppError> {
    let digest = state
        .with_store(move |store| store.add(&req.plain_text))
        .await?;
    tracing::info!(%digest, "secret submitted");

    Ok((
        StatusCode::CREATED,
        Json(CreateSecretResponse {
            id: digest.into_string(),
        }),
    ))
}

/// GET /{id} — Reveal a secret and erase it.
#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = String, Path, description = "Secret digest")),
    responses(
        (status = 200, description = "Secret revealed and erased", body = SecretResponse),
        (status = 404, description = "Unknown or already revealed", body = crate::error::ErrorBody),
    ),
    tag = "secrets"
)]
pub(crate) async fn reveal_secret(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SecretResponse>, AppError> {
    let data = state.with_store(move |store| store.get(&id)).await?;
    tracing::info!("secret revealed");
    Ok(Json(SecretResponse { data }))
}

/// GET / — No id supplied.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 400, description = "Secret id is required", body = crate::error::ErrorBody),
    ),
    tag = "secrets"
)]
pub(crate) async fn missing_id() -> AppError {
    AppError::BadRequest("secret id is required".to_string())
}
