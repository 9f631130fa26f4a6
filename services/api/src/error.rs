//! Custom error types for the photo service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the photo service
///
/// `NotFound` and `InvalidInput` both map to 400: the original client
/// contract reports unknown users/photos and bad payloads the same way.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A referenced user, photo, or parent comment does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request payload failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or invalid caller identity
    #[error("Unauthorized")]
    Unauthorized,

    /// The underlying store is unavailable; surfaced unmodified
    #[error("Store error: {0}")]
    Store(#[from] common::error::StoreError),

    /// Anything else
    #[error("Internal server error")]
    InternalServerError,
}

/// Body deserialization failures (missing fields, malformed UUIDs) are
/// payload validation failures as far as clients are concerned.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Store(e) => {
                tracing::error!("Store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Store error".to_string(),
                )
            }
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for photo service results
pub type ApiResult<T> = Result<T, ApiError>;
