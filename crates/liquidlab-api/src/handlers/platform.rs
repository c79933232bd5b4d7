// ============================================================================
// LiquidLab API - Platform Handlers
// File: crates/liquidlab-api/src/handlers/platform.rs
// ============================================================================
//! Platform lookups for tenant sites and API clients

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use liquidlab_core::{normalize_host, ResolvedPlatform};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extractors::CurrentPlatform;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub host: String,
}

/// Current platform - GET /platform.json (guarded)
pub async fn current_platform(CurrentPlatform(platform): CurrentPlatform) -> Json<ResolvedPlatform> {
    Json(platform)
}

/// Host lookup - GET /api/v1/platforms/resolve?host=
///
/// Same rules as the middleware minus the path exemptions, for clients that
/// know a hostname but are not served from it. Unlike the middleware, a
/// missing or malformed host is the caller's mistake and answers 400.
pub async fn resolve_host(
    State(state): State<AppState>,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ResolvedPlatform>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    normalize_host(&query.host)?;

    let resolution = state.resolver.resolve_host(&query.host).await?;

    resolution
        .into_platform()
        .map(|platform| Json(ApiResponse::success(platform)))
        .ok_or(ApiError::PlatformNotFound)
}
