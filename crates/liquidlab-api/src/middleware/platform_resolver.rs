//! Domain resolver middleware

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::{IntoResponse, Response},
};
use liquidlab_core::Resolution;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Resolve the request's platform and attach the outcome as a typed
/// extension. Runs at most once per request.
pub async fn resolve_platform(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<Resolution>().is_some() {
        return next.run(request).await;
    }

    // Body is not `Sync`: nothing borrowed from the request may cross the await.
    let host = request_host(&request, state.config.tenancy.trust_forwarded_host);
    let path = request.uri().path().to_owned();
    let resolution = match state.resolver.resolve(host.as_deref(), &path).await {
        Ok(resolution) => resolution,
        // Only reachable under the fail-closed policy.
        Err(e) => return ApiError::from(e).into_response(),
    };

    debug!(
        host = host.as_deref().unwrap_or(""),
        outcome = resolution.as_str(),
        "Platform resolution finished"
    );

    request.extensions_mut().insert(resolution);
    next.run(request).await
}

/// Raw host the client asked for: `X-Forwarded-Host` when trusted, then
/// `Host`, then the URI authority (HTTP/2).
fn request_host(request: &Request, trust_forwarded_host: bool) -> Option<String> {
    let headers = request.headers();

    if trust_forwarded_host {
        let forwarded = headers
            .get(X_FORWARDED_HOST)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());
        if let Some(host) = forwarded {
            return Some(host.to_string());
        }
    }

    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().host().map(str::to_string))
}
