//! Shared fixtures for handler and router tests

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::HOST, Request, StatusCode},
    Router,
};
use chrono::Utc;
use liquidlab_core::domain::Platform;
use liquidlab_core::error::DomainError;
use liquidlab_core::repositories::PlatformRepository;
use liquidlab_shared::config::AppConfig;
use mockall::mock;
use serde_json::json;
use tower::ServiceExt;

mock! {
    pub Platforms {}

    #[async_trait]
    impl PlatformRepository for Platforms {
        async fn find_by_subdomain(&self, subdomain: &str) -> Result<Option<Platform>, DomainError>;
        async fn find_by_custom_domain(&self, domain: &str) -> Result<Option<Platform>, DomainError>;
        async fn ping(&self) -> Result<(), DomainError>;
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::defaults()
        .and_then(|builder| builder.build())
        .and_then(|config| config.try_deserialize())
        .expect("default config")
}

pub fn acme() -> Platform {
    Platform {
        id: 42,
        user_id: 7,
        name: "Acme Trading".to_string(),
        subdomain: "acme".to_string(),
        custom_domain: Some("trade.acme.com".to_string()),
        config: json!({ "primaryColor": "#00ff88" }),
        logo_url: Some("https://cdn.acme.com/logo.png".to_string()),
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// GET `uri` with the given `Host` header; returns status and body text.
pub async fn send(app: &Router, host: &str, uri: &str) -> (StatusCode, String) {
    send_request(app, get(host, uri)).await
}

pub fn get(host: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(HOST, host)
        .body(Body::empty())
        .expect("request")
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");

    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}
