//! # sharesecret-api — HTTP Service for sharesecret
//!
//! Thin Axum layer over [`sharesecret_store::SecretStore`]: it turns HTTP
//! requests into `add`/`get` calls and store results into status codes and
//! JSON bodies.
//!
//! ## API Surface
//!
//! | Route             | Module                  | Purpose                      |
//! |-------------------|-------------------------|------------------------------|
//! | `POST /`          | [`routes::secrets`]     | Store a secret, return its id |
//! | `GET /{id}`       | [`routes::secrets`]     | Reveal once, then erase      |
//! | `GET /healthcheck`| this module             | Liveness                     |
//! | `GET /openapi.json` | [`openapi`]           | OpenAPI document             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → TimeoutLayer → DefaultBodyLimit → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Assemble the full application router with all routes and middleware.
///
/// The health check is mounted outside the middleware stack. Unmatched paths
/// get the structured 404 body.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::secrets::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(state.config.body_limit))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new().route("/healthcheck", get(healthcheck));

    Router::new()
        .merge(health)
        .merge(api)
        .fallback(unknown_route)
}

async fn unknown_route() -> AppError {
    AppError::NotFound("no such route".to_string())
}

/// GET /healthcheck — Always 200 while the process is serving.
#[utoipa::path(
    get,
    path = "/healthcheck",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "health"
)]
pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
