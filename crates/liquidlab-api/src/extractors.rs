//! Extractors for the request's resolved platform
//!
//! ```rust,ignore
//! async fn dashboard(CurrentPlatform(platform): CurrentPlatform) -> impl IntoResponse {
//!     // platform is the ResolvedPlatform for this host
//! }
//! ```

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use liquidlab_core::{ResolvedPlatform, Resolution};

use crate::error::ApiError;

/// Platform resolved for this request; rejects with the guard's 404
/// when there is none.
#[derive(Debug, Clone)]
pub struct CurrentPlatform(pub ResolvedPlatform);

impl<S: Send + Sync> FromRequestParts<S> for CurrentPlatform {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Resolution>()
            .and_then(Resolution::platform)
            .cloned()
            .map(CurrentPlatform)
            .ok_or(ApiError::PlatformNotFound)
    }
}

/// Platform resolved for this request, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybePlatform(pub Option<ResolvedPlatform>);

impl<S: Send + Sync> FromRequestParts<S> for MaybePlatform {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybePlatform(
            parts
                .extensions
                .get::<Resolution>()
                .and_then(Resolution::platform)
                .cloned(),
        ))
    }
}
