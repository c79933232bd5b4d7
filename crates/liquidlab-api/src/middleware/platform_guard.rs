//! Platform guard middleware

use axum::{extract::Request, middleware::Next, response::Response};
use liquidlab_core::Resolution;

use crate::error::ApiError;

/// Reject the request with 404 `{"message":"Platform not found"}` unless a
/// platform was resolved for it.
pub async fn require_platform(request: Request, next: Next) -> Result<Response, ApiError> {
    match request.extensions().get::<Resolution>() {
        Some(Resolution::Resolved(_)) => Ok(next.run(request).await),
        _ => Err(ApiError::PlatformNotFound),
    }
}
