//! HTTP handlers

pub mod health;
pub mod platform;
pub mod site;

use crate::error::ApiError;

/// Fallback for unrouted paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
