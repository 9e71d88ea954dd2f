//! # JSON Body Extraction
//!
//! Handlers take [`JsonBody<T>`], so every body problem is answered with the
//! structured [`AppError`] body instead of Axum's plain-text rejection.
//!
//! A request without a `Content-Type` header is still decoded as JSON. Only a
//! content type that is present and not JSON is refused.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body with rejections mapped to [`AppError`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            return extract_json(Json::<T>::from_request(req, state).await).map(Self);
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(err.body_text())
            } else {
                AppError::BadRequest(err.body_text())
            }
        })?;
        extract_json(Json::<T>::from_bytes(&bytes)).map(Self)
    }
}

/// Unwrap a JSON body, mapping rejections to [`AppError`].
///
/// Oversized bodies become [`AppError::PayloadTooLarge`]. Everything else
/// (non-JSON content type, empty body, malformed JSON, unknown or missing
/// fields) becomes [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result.map(|Json(v)| v).map_err(|err| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::BadRequest(err.body_text())
        }
    })
}
