//! Router assembly
//!
//! Layer order per request: request id, trace, CORS, then for site and API
//! routes the platform resolver, and for tenant routes the platform guard.
//! Health probes bypass resolution.

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Router,
};
use liquidlab_shared::config::CorsSettings;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use crate::handlers::{self, health, platform, site};
use crate::middleware::{require_platform, resolve_platform};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Only meaningful on a tenant host
    let tenant_routes = Router::new()
        .route("/platform.json", get(platform::current_platform))
        .route_layer(middleware::from_fn(require_platform));

    // Tenant-aware but unguarded
    let site_routes = Router::new()
        .route("/", get(site::index))
        .merge(tenant_routes);

    let api_routes = Router::new()
        .route("/api/v1/platforms/resolve", get(platform::resolve_host));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let cors = cors_layer(&state.config.cors);

    Router::new()
        .merge(site_routes)
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), resolve_platform))
        .merge(health_routes)
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let allow_origin = if settings.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
