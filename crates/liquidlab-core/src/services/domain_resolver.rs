// ============================================================================
// LiquidLab Core - Domain Resolver
// File: crates/liquidlab-core/src/services/domain_resolver.rs
// ============================================================================
//! Maps an inbound hostname to the platform that owns it

use std::sync::Arc;
use tracing::{debug, error, warn};

use liquidlab_shared::FailurePolicy;

use crate::domain::{normalize_host, HostClass, Resolution, ResolutionRules, ResolvedPlatform};
use crate::error::DomainError;
use crate::repositories::PlatformRepository;

/// Resolves hostnames to platforms with at most one store lookup per call.
///
/// Holds no cache and never writes; resolving the same host twice yields the
/// same view as long as the stored row is unchanged.
pub struct DomainResolver {
    platforms: Arc<dyn PlatformRepository>,
    rules: ResolutionRules,
    failure_policy: FailurePolicy,
}

impl DomainResolver {
    pub fn new(
        platforms: Arc<dyn PlatformRepository>,
        rules: ResolutionRules,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            platforms,
            rules,
            failure_policy,
        }
    }

    /// Resolve the platform for a request.
    ///
    /// Only returns `Err` for a store failure under [`FailurePolicy::Closed`].
    /// Missing or malformed hosts resolve to nothing rather than failing.
    pub async fn resolve(&self, host: Option<&str>, path: &str) -> Result<Resolution, DomainError> {
        if self.rules.is_exempt_path(path) {
            debug!("Exempt path {}, skipping platform resolution", path);
            return Ok(Resolution::Exempt);
        }

        match host {
            Some(host) => self.resolve_host(host).await,
            None => {
                warn!("Request to {} has no host, continuing without platform", path);
                Ok(Resolution::Unresolved)
            }
        }
    }

    /// Same as [`resolve`](Self::resolve) without the path exemptions.
    pub async fn resolve_host(&self, raw_host: &str) -> Result<Resolution, DomainError> {
        let host = match normalize_host(raw_host) {
            Ok(host) => host,
            Err(e) => {
                warn!("Unusable host {:?}: {}", raw_host, e);
                return Ok(Resolution::Unresolved);
            }
        };

        if self.rules.is_exempt_host(&host) {
            debug!("Exempt host {}, skipping platform resolution", host);
            return Ok(Resolution::Exempt);
        }

        let (lookup, is_custom_domain) = match self.rules.classify(&host) {
            Ok(HostClass::Subdomain(subdomain)) => {
                (self.platforms.find_by_subdomain(subdomain).await, false)
            }
            Ok(HostClass::CustomDomain(domain)) => {
                (self.platforms.find_by_custom_domain(domain).await, true)
            }
            Err(e) => {
                warn!("Unusable host {:?}: {}", raw_host, e);
                return Ok(Resolution::Unresolved);
            }
        };

        match lookup {
            Ok(Some(platform)) => {
                debug!(
                    platform_id = platform.id,
                    is_custom_domain,
                    "Resolved host {} to platform {}",
                    host,
                    platform.name
                );
                Ok(Resolution::Resolved(ResolvedPlatform::from_platform(
                    &platform,
                    &host,
                    is_custom_domain,
                )))
            }
            Ok(None) => {
                debug!("No platform registered for host {}", host);
                Ok(Resolution::Unresolved)
            }
            Err(e) => match self.failure_policy {
                FailurePolicy::Open => {
                    error!("Platform lookup failed for host {}, continuing without platform: {}", host, e);
                    Ok(Resolution::Unresolved)
                }
                FailurePolicy::Closed => {
                    error!("Platform lookup failed for host {}: {}", host, e);
                    Err(e)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;
    use crate::repositories::MockPlatformRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use serde_json::json;

    fn acme() -> Platform {
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

    fn resolver(repo: MockPlatformRepository, policy: FailurePolicy) -> DomainResolver {
        DomainResolver::new(Arc::new(repo), ResolutionRules::default(), policy)
    }

    #[tokio::test]
    async fn test_exempt_requests_skip_lookup() {
        // No expectations: any lookup panics.
        let resolver = resolver(MockPlatformRepository::new(), FailurePolicy::Open);

        let cases = [
            ("liquidlab.trade", "/"),
            ("LiquidLab.Trade:443", "/pricing"),
            ("localhost", "/"),
            ("localhost:5173", "/platform.json"),
            ("acme.liquidlab.trade", "/api/v1/platforms"),
            ("trade.acme.com", "/admin"),
        ];
        for (host, path) in cases {
            let resolution = resolver.resolve(Some(host), path).await.unwrap();
            assert_eq!(resolution, Resolution::Exempt, "{host} {path}");
        }
    }

    #[tokio::test]
    async fn test_subdomain_resolution() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_subdomain()
            .with(eq("acme"))
            .times(1)
            .returning(|_| Ok(Some(acme())));

        let resolution = resolver(repo, FailurePolicy::Open)
            .resolve(Some("acme.liquidlab.trade"), "/")
            .await
            .unwrap();

        let platform = resolution.into_platform().expect("platform resolved");
        assert_eq!(platform.id, 42);
        assert_eq!(platform.owner_id, "7");
        assert!(!platform.is_custom_domain);
        assert_eq!(platform.domain, "acme.liquidlab.trade");
        assert_eq!(platform.logo_url.as_deref(), Some("https://cdn.acme.com/logo.png"));
    }

    #[tokio::test]
    async fn test_subdomain_shape_never_falls_back_to_custom_domain() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_subdomain()
            .with(eq("ghost"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_find_by_custom_domain().never();

        let resolution = resolver(repo, FailurePolicy::Open)
            .resolve(Some("ghost.liquidlab.app"), "/")
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[tokio::test]
    async fn test_custom_domain_resolution() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_subdomain().never();
        repo.expect_find_by_custom_domain()
            .with(eq("trade.acme.com"))
            .times(1)
            .returning(|_| Ok(Some(acme())));

        let resolution = resolver(repo, FailurePolicy::Open)
            .resolve(Some("Trade.Acme.com:8443"), "/")
            .await
            .unwrap();

        let platform = resolution.into_platform().expect("platform resolved");
        assert!(platform.is_custom_domain);
        assert_eq!(platform.domain, "trade.acme.com");
    }

    #[tokio::test]
    async fn test_no_match_is_unresolved() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_custom_domain().times(1).returning(|_| Ok(None));

        let resolution = resolver(repo, FailurePolicy::Open)
            .resolve(Some("unknown.example.org"), "/")
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[tokio::test]
    async fn test_missing_or_malformed_host_skips_lookup() {
        let resolver = resolver(MockPlatformRepository::new(), FailurePolicy::Closed);

        assert_eq!(resolver.resolve(None, "/").await.unwrap(), Resolution::Unresolved);
        assert_eq!(resolver.resolve(Some(""), "/").await.unwrap(), Resolution::Unresolved);
        assert_eq!(
            resolver.resolve(Some("bad host!"), "/").await.unwrap(),
            Resolution::Unresolved
        );
    }

    #[tokio::test]
    async fn test_store_failure_fails_open() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_subdomain()
            .times(1)
            .returning(|_| Err(DomainError::DatabaseError("connection refused".to_string())));

        let resolution = resolver(repo, FailurePolicy::Open)
            .resolve(Some("acme.liquidlab.trade"), "/")
            .await;

        assert_eq!(resolution, Ok(Resolution::Unresolved));
    }

    #[tokio::test]
    async fn test_store_failure_fails_closed() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_custom_domain()
            .times(1)
            .returning(|_| Err(DomainError::DatabaseError("timeout".to_string())));

        let resolution = resolver(repo, FailurePolicy::Closed)
            .resolve(Some("trade.acme.com"), "/")
            .await;

        assert_eq!(
            resolution,
            Err(DomainError::DatabaseError("timeout".to_string()))
        );
    }

    #[tokio::test]
    async fn test_repeated_resolution_is_identical() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_subdomain()
            .with(eq("acme"))
            .times(2)
            .returning(|_| Ok(Some(acme())));
        let resolver = resolver(repo, FailurePolicy::Open);

        let first = resolver.resolve(Some("acme.liquidlab.trade"), "/").await.unwrap();
        let second = resolver.resolve(Some("acme.liquidlab.trade"), "/").await.unwrap();

        assert!(first.is_resolved());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_host_ignores_path_rules() {
        let mut repo = MockPlatformRepository::new();
        repo.expect_find_by_subdomain()
            .with(eq("acme"))
            .times(1)
            .returning(|_| Ok(Some(acme())));
        let resolver = resolver(repo, FailurePolicy::Open);

        assert!(resolver.resolve_host("acme.liquidlab.trade").await.unwrap().is_resolved());
        assert_eq!(resolver.resolve_host("liquidlab.trade").await.unwrap(), Resolution::Exempt);
    }
}
