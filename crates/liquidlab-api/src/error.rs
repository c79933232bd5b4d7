//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use liquidlab_core::DomainError;
use liquidlab_shared::constants::PLATFORM_NOT_FOUND_MESSAGE;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No platform for this host, or the lookup failed open. The two are
    /// deliberately indistinguishable to callers.
    #[error("Platform not found")]
    PlatformNotFound,

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::PlatformNotFound => {
                tracing::debug!("Platform not found");
                (StatusCode::NOT_FOUND, None, PLATFORM_NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, None, "Not found".to_string()),
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Some("BadRequest"), msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, Some("ServiceUnavailable"), msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some("InternalError"),
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type,
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingHost => ApiError::BadRequest("Host is required".to_string()),
            DomainError::MalformedHost(host) => ApiError::BadRequest(format!("Malformed host: {}", host)),
            DomainError::DatabaseError(_) => {
                ApiError::ServiceUnavailable("Platform lookup unavailable".to_string())
            }
        }
    }
}
